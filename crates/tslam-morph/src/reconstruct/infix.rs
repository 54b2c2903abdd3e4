// Infix step: match the target against the entry's infix template with the
// recognized morphemes substituted into the three slots.

use regex::Regex;
use tslam_core::affix::AffixRecord;
use tslam_core::entry::HeadwordEntry;

use super::LETTERS;
use crate::tables::{ABSORBER_ALTS, SLOT0_ALTS, SLOT1_ALTS, SLOT2_ALTS};

/// Try the infix step. Returns the conjugated core on success, `None` when
/// the target carries no recognizable infix (a no-op, not a failure).
pub(super) fn apply(
    entry: &HeadwordEntry,
    target: &str,
    rec: &mut AffixRecord,
) -> Option<String> {
    let re = template_regex(&entry.infix_template)?;
    let caps = re.captures(target)?;

    let s0 = caps.name("s0").map(|m| m.as_str());
    let s1 = caps
        .name("s1")
        .or_else(|| caps.name("s1g"))
        .map(|m| m.as_str());
    let s2 = caps.name("s2").map(|m| m.as_str());

    if s0.is_none() && s1.is_none() && s2.is_none() {
        return None;
    }

    if let Some(s0) = s0 {
        if s0 == "äpeyk" {
            rec.infixes.push("äp".into());
            rec.infixes.push("eyk".into());
        } else {
            rec.infixes.push(s0.into());
        }
    }
    if let Some(s1) = s1 {
        rec.infixes.push(s1.into());
    }
    if let Some(s2) = s2 {
        // The long allomorph is recorded under the dictionary spelling.
        rec.infixes
            .push(if s2 == "eiy" { "ei".into() } else { s2.into() });
    }

    Some(caps.name("core")?.as_str().to_string())
}

/// Build the matching pattern for one infix template. The template must
/// carry all three slots in order; anything around the core is left to the
/// prefix and suffix steps.
fn template_regex(template: &str) -> Option<Regex> {
    let (pre0, rest) = template.split_once("<0>")?;
    let (pre1, rest) = rest.split_once("<1>")?;
    let (mid, post) = rest.split_once("<2>")?;

    let slot0 = format!("(?P<s0>{})?", *SLOT0_ALTS);
    let slot2 = format!("(?P<s2>{})?", *SLOT2_ALTS);

    // A geminate liquid written right after slot 1 absorbs into the
    // perfective/imperfective morphemes instead of surfacing doubled.
    let (slot1, mid) = if let Some(stripped) = mid.strip_prefix("ll") {
        (geminate_slot1("l"), stripped)
    } else if let Some(stripped) = mid.strip_prefix("rr") {
        (geminate_slot1("r"), stripped)
    } else {
        (format!("(?P<s1>{})?", *SLOT1_ALTS), mid)
    };

    let core = format!(
        "(?P<core>{}{}{}{}{}{}{})",
        regex::escape(pre0),
        slot0,
        regex::escape(pre1),
        slot1,
        regex::escape(mid),
        slot2,
        regex::escape(post),
    );
    Regex::new(&format!("^{LETTERS}*?{core}{LETTERS}*$")).ok()
}

fn geminate_slot1(liquid: &str) -> String {
    format!(
        "(?:(?P<s1g>{abs})|(?P<s1>{alts})?{liquid}{liquid})",
        abs = *ABSORBER_ALTS,
        alts = *SLOT1_ALTS,
    )
}
