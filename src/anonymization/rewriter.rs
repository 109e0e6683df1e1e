//! Text rewriter
//!
//! Stage 3 of the transform lifecycle, in both directions. The forward
//! pass stitches untouched gaps and replacements into the anonymized
//! text, recording each replacement's position as it goes; the inverse
//! pass mirrors the walk over the anonymized text, substituting the
//! stored originals back in.
//!
//! The central invariant: the concatenation of all gaps and all
//! replacements, in order, is exactly the anonymized text, so the
//! inverse pass needs no copy of the original text, only the
//! transform set.

use crate::domain::{Result, ScrubError, TransformSet};
use sha2::{Digest, Sha256};

/// Forward pass: original text → anonymized text
///
/// Walks the original text with a cursor, appending each untouched gap
/// and each replacement in turn. Records `anon_begin_offset` /
/// `anon_end_offset` (inclusive) on every transform and stamps the set
/// with the output's length and SHA-256 so a later revert can detect a
/// transform/text mismatch.
///
/// An empty replacement yields `anon_end_offset == anon_begin_offset -
/// 1`: a degenerate empty range the inverse pass handles uniformly.
///
/// # Errors
///
/// Returns a `Validation` error when a transform has not completed
/// stage 2, or when its offsets are out of order or out of bounds for
/// the text.
pub fn to_anonymized(text: &str, set: &mut TransformSet) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut offset = 0usize;

    for transform in &mut set.transforms {
        if transform.begin_offset < offset || transform.end_offset > text.len() {
            return Err(ScrubError::Validation(format!(
                "Transform for '{}' at [{}, {}) is out of order or out of bounds",
                transform.entity_type, transform.begin_offset, transform.end_offset
            )));
        }
        if !text.is_char_boundary(transform.begin_offset)
            || !text.is_char_boundary(transform.end_offset)
        {
            return Err(ScrubError::Validation(format!(
                "Transform for '{}' at [{}, {}) is not on a character boundary",
                transform.entity_type, transform.begin_offset, transform.end_offset
            )));
        }
        let anonymized = transform.anonymized.as_deref().ok_or_else(|| {
            ScrubError::Validation(format!(
                "Transform for '{}' has no anonymized value; run annotation first",
                transform.entity_type
            ))
        })?;

        out.push_str(&text[offset..transform.begin_offset]);
        transform.anon_begin_offset = Some(out.len() as i64);
        out.push_str(anonymized);
        transform.anon_end_offset = Some(out.len() as i64 - 1);
        offset = transform.end_offset;
    }

    out.push_str(&text[offset..]);

    set.anonymized_len = Some(out.len());
    set.anonymized_sha256 = Some(sha256_hex(&out));

    Ok(out)
}

/// Inverse pass: anonymized text + transform set → original text
///
/// Verifies the set's consistency metadata against the supplied text
/// first (see [`verify_consistency`]), then mirrors the forward walk,
/// substituting each stored original for its replacement span.
///
/// # Errors
///
/// Returns `TransformMismatch` when the text does not match the set's
/// recorded length or checksum, and `Validation` when the set is
/// missing stage-2/3 data or its anonymized-side offsets are malformed.
pub fn to_original(anonymized_text: &str, set: &TransformSet) -> Result<String> {
    verify_consistency(anonymized_text, set)?;
    reconstruct(anonymized_text, set)
}

/// Inverse pass without the consistency check
///
/// For transform sets supplied externally without length/checksum
/// metadata, or callers that have already verified provenance.
/// Offset validation still applies.
pub fn to_original_unchecked(anonymized_text: &str, set: &TransformSet) -> Result<String> {
    reconstruct(anonymized_text, set)
}

/// Check that the anonymized text matches the set's recorded length and
/// SHA-256 checksum
///
/// Metadata fields that are absent (externally-supplied sets) are
/// skipped. A disagreement means the set was retrieved for the wrong
/// text; failing here is what prevents the inverse pass from silently
/// producing garbage.
pub fn verify_consistency(anonymized_text: &str, set: &TransformSet) -> Result<()> {
    if let Some(expected_len) = set.anonymized_len {
        if expected_len != anonymized_text.len() {
            return Err(ScrubError::TransformMismatch {
                expected: format!("length {expected_len}"),
                actual: format!("length {}", anonymized_text.len()),
            });
        }
    }
    if let Some(ref expected_sha) = set.anonymized_sha256 {
        let actual_sha = sha256_hex(anonymized_text);
        if *expected_sha != actual_sha {
            return Err(ScrubError::TransformMismatch {
                expected: format!("sha256 {expected_sha}"),
                actual: format!("sha256 {actual_sha}"),
            });
        }
    }
    Ok(())
}

fn reconstruct(anonymized_text: &str, set: &TransformSet) -> Result<String> {
    let mut out = String::with_capacity(anonymized_text.len());
    let mut offset = 0usize;

    for transform in &set.transforms {
        let original = transform.original.as_deref().ok_or_else(|| {
            ScrubError::Validation(format!(
                "Transform for '{}' has no original value; cannot revert",
                transform.entity_type
            ))
        })?;
        let (begin, end) = match (transform.anon_begin_offset, transform.anon_end_offset) {
            (Some(b), Some(e)) => (b, e),
            _ => {
                return Err(ScrubError::Validation(format!(
                    "Transform for '{}' has no anonymized-side offsets; cannot revert",
                    transform.entity_type
                )));
            }
        };

        // end is inclusive and may be begin - 1 for an empty replacement
        if begin < offset as i64 || end < begin - 1 || end + 1 > anonymized_text.len() as i64 {
            return Err(ScrubError::Validation(format!(
                "Transform for '{}' has malformed anonymized-side offsets [{begin}, {end}]",
                transform.entity_type
            )));
        }
        let begin = begin as usize;
        let next = (end + 1) as usize;
        if !anonymized_text.is_char_boundary(begin) || !anonymized_text.is_char_boundary(next) {
            return Err(ScrubError::Validation(format!(
                "Transform for '{}' offsets [{begin}, {end}] split a character",
                transform.entity_type
            )));
        }

        out.push_str(&anonymized_text[offset..begin]);
        out.push_str(original);
        offset = next;
    }

    out.push_str(&anonymized_text[offset..]);

    Ok(out)
}

fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
