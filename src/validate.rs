//! Input validation and sanitization into a [`SequenceSet`].
//!
//! Two paths feed the broker. The typed path takes string pairs as-is. The
//! loose path accepts `serde_json::Value` pairs from dynamically typed
//! hosts: names must be JSON strings, and scalar values (numbers, booleans)
//! are coerced to their string rendering - an explicitly documented fallback
//! replacing the unbounded duck typing of earlier incarnations of this
//! boundary. Both paths run the same per-character alphabet check.

use serde_json::Value;

use crate::core::sequence::{SequenceEntry, SequenceSet};
use crate::core::types::{is_gap, SeqKind};
use crate::error::AlignError;

/// Validate one residue string against `kind`'s alphabet.
///
/// The check is case-insensitive and skips gap characters; the stored
/// residues keep their original casing. [`SeqKind::Unknown`] passes every
/// character through.
///
/// # Errors
///
/// Returns `AlignError::InvalidResidue` naming the sequence and the first
/// offending character.
pub fn check_residues(name: &str, residues: &str, kind: SeqKind) -> Result<(), AlignError> {
    for residue in residues.chars() {
        if is_gap(residue) {
            continue;
        }
        if !kind.accepts(residue) {
            return Err(AlignError::InvalidResidue {
                name: name.to_string(),
                residue,
            });
        }
    }
    Ok(())
}

/// Build a validated set from already-typed string pairs, preserving input
/// order.
///
/// # Errors
///
/// Returns `AlignError::InvalidResidue` for the first entry failing the
/// alphabet check; nothing of the set survives a failure.
pub fn build_set<'a, I>(pairs: I, kind: SeqKind) -> Result<SequenceSet, AlignError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut set = SequenceSet::new();
    for (name, residues) in pairs {
        check_residues(name, residues, kind)?;
        set.push(SequenceEntry::new(name, residues, kind));
    }
    Ok(set)
}

/// Build a validated set from loosely typed pairs.
///
/// Duplicate names resolve last-write-wins, the entry keeping its original
/// position (mapping overwrite semantics).
///
/// # Errors
///
/// Returns `AlignError::InvalidKeyType` for a non-string name,
/// `AlignError::ValueCoercion` for a value with no string rendering, or
/// `AlignError::InvalidResidue` for an alphabet failure. Each aborts the
/// whole set.
pub fn build_set_loose(entries: &[(Value, Value)], kind: SeqKind) -> Result<SequenceSet, AlignError> {
    let mut set = SequenceSet::new();
    for (key, value) in entries {
        let name = coerce_key(key)?;
        let residues = coerce_value(&name, value)?;
        check_residues(&name, &residues, kind)?;
        set.push(SequenceEntry::new(name, residues, kind));
    }
    Ok(set)
}

/// Render a loose key as a sequence name.
fn coerce_key(key: &Value) -> Result<String, AlignError> {
    match key {
        Value::String(name) => Ok(name.clone()),
        other => Err(AlignError::InvalidKeyType(other.to_string())),
    }
}

/// Render a loose value as a residue string. Strings pass through; numbers
/// and booleans are coerced. Nulls, arrays, and objects are rejected.
fn coerce_value(key: &str, value: &Value) -> Result<String, AlignError> {
    match value {
        Value::String(residues) => Ok(residues.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(AlignError::ValueCoercion {
            key: key.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dna_with_gaps_and_wildcard() {
        assert!(check_residues("a", "GAT-TAC.A_N~n acgt", SeqKind::Dna).is_ok());
    }

    #[test]
    fn test_dna_rejects_protein_residue() {
        let err = check_residues("a", "GATTACAX", SeqKind::Dna).unwrap_err();
        match err {
            AlignError::InvalidResidue { name, residue } => {
                assert_eq!(name, "a");
                assert_eq!(residue, 'X');
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_protein_rejects_digit() {
        let err = check_residues("prot1", "TEST5TEST", SeqKind::Protein).unwrap_err();
        match err {
            AlignError::InvalidResidue { name, residue } => {
                assert_eq!(name, "prot1");
                assert_eq!(residue, '5');
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_protein_accepts_wildcard_and_case() {
        assert!(check_residues("p", "TestTestX-x", SeqKind::Protein).is_ok());
    }

    #[test]
    fn test_unknown_is_pass_through() {
        assert!(check_residues("u", "123!?TESTacgu", SeqKind::Unknown).is_ok());
    }

    #[test]
    fn test_build_set_preserves_order_and_casing() {
        let set = build_set(vec![("b", "acGT"), ("a", "TGCA")], SeqKind::Dna).unwrap();
        let entries: Vec<(&str, &str)> = set
            .iter()
            .map(|e| (e.name.as_str(), e.residues.as_str()))
            .collect();
        assert_eq!(entries, vec![("b", "acGT"), ("a", "TGCA")]);
        assert!(!set.is_aligned());
    }

    #[test]
    fn test_build_set_fails_on_any_bad_entry() {
        let result = build_set(vec![("good", "ACGT"), ("bad", "ACQT")], SeqKind::Dna);
        assert!(matches!(
            result,
            Err(AlignError::InvalidResidue { residue: 'Q', .. })
        ));
    }

    #[test]
    fn test_loose_null_key_rejected() {
        let entries = vec![
            (Value::Null, json!("ACGT")),
            (json!("b"), json!("ACGT")),
        ];
        let err = build_set_loose(&entries, SeqKind::Dna).unwrap_err();
        assert!(matches!(err, AlignError::InvalidKeyType(ref k) if k == "null"));
    }

    #[test]
    fn test_loose_integer_key_rejected() {
        let entries = vec![(json!(1), json!("ACGT"))];
        let err = build_set_loose(&entries, SeqKind::Dna).unwrap_err();
        assert!(matches!(err, AlignError::InvalidKeyType(ref k) if k == "1"));
    }

    #[test]
    fn test_loose_scalar_values_coerced() {
        // Numbers and booleans stringify; Unknown skips the alphabet check
        let entries = vec![(json!("n"), json!(42)), (json!("b"), json!(true))];
        let set = build_set_loose(&entries, SeqKind::Unknown).unwrap();
        let residues: Vec<&str> = set.iter().map(|e| e.residues.as_str()).collect();
        assert_eq!(residues, vec!["42", "true"]);
    }

    #[test]
    fn test_loose_array_value_rejected() {
        let entries = vec![(json!("a"), json!(["ACGT"]))];
        let err = build_set_loose(&entries, SeqKind::Dna).unwrap_err();
        assert!(matches!(err, AlignError::ValueCoercion { ref key } if key == "a"));
    }

    #[test]
    fn test_loose_duplicate_names_last_write_wins() {
        let entries = vec![
            (json!("a"), json!("ACGT")),
            (json!("b"), json!("GGGG")),
            (json!("a"), json!("TTTT")),
        ];
        let set = build_set_loose(&entries, SeqKind::Dna).unwrap();
        assert_eq!(set.len(), 2);
        let entries: Vec<(&str, &str)> = set
            .iter()
            .map(|e| (e.name.as_str(), e.residues.as_str()))
            .collect();
        assert_eq!(entries, vec![("a", "TTTT"), ("b", "GGGG")]);
    }
}
