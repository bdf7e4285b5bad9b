//! Fuzzy cursor-advance matching
//!
//! Tries to sequentially match the next characters of the query against a
//! candidate name, returning the new endpoint in the query. By default this
//! is subsequence matching: name characters that don't match are skipped.
//! A toggle character (default '=') switches to consecutive matching, where
//! the span up to the next toggle character must be matched by contiguous
//! name characters. "aeiou" matches "abefijopuv", but "a=eio=u" does not.

use crate::core::query::Query;

/// Advance the query cursor by consuming `name` starting at `start`.
///
/// Returns the new cursor. Guarantees `start <= end <= query.len()`;
/// a pure function with no error conditions.
pub fn advance(query: &Query, name: &str, start: usize) -> usize {
    let folded: Vec<char> = if query.fold_case() {
        name.chars().map(|c| c.to_ascii_lowercase()).collect()
    } else {
        name.chars().collect()
    };

    let mut qo = start;
    let mut i = 0;

    while i < folded.len() {
        let Some(qc) = query.char_at(qo) else {
            break;
        };

        if qc != query.conseq_char() {
            // Scattered mode: skip name characters freely.
            let c = folded[i];
            i += 1;
            if qc == c {
                qo += 1;
                if query.is_complete(qo) {
                    break;
                }
            }
        } else {
            // Consecutive run: the span after the toggle must be matched by
            // contiguous name characters. On the first mismatch the cursor
            // rolls back to the run entry point and the run is retried one
            // name position later.
            let run_entry = qo;
            loop {
                qo += 1;
                if query.is_complete(qo) {
                    return qo;
                }
                if query.char_at(qo) == Some(query.conseq_char()) {
                    // Empty span: the run ends, back to scattered mode.
                    qo += 1;
                    break;
                }
                match folded.get(i) {
                    Some(&c) if Some(c) == query.char_at(qo) => {
                        i += 1;
                    }
                    _ => {
                        i += 1;
                        qo = run_entry;
                        break;
                    }
                }
            }
        }
    }

    qo
}
