//! Grammar-construct statistics for a single SysY source file.
//!
//! The external analyzer emits one statistics object per file. Its grammar
//! counters normally sit under a `grammar` key next to a `lexical` object:
//!
//! ```json
//! { "lexical": { "ids": 12, ... }, "grammar": { "unary_exprs": 1, ... } }
//! ```
//!
//! A flat object holding the grammar counters directly is accepted too.
//! Counters may be given as JSON booleans, in which case `true` counts as 1.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::error::ClassifyError;
use crate::Result;

/// Lexical counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalStats {
    /// Identifiers
    pub ids: u64,
    /// Decimal integer literals
    pub decimals: u64,
    /// Octal integer literals
    pub octals: u64,
    /// Hexadecimal integer literals
    pub hexadecimals: u64,
    /// Unary operators
    pub unary_ops: u64,
    /// Binary operators
    pub binary_ops: u64,
}

/// Grammar counters.
///
/// Absent counters deserialize as zero; whether an absent counter is an error
/// is decided by the classifier, which knows which fields each category reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarStats {
    /// Constant declarations
    pub const_decls: u64,
    /// Constant definitions
    pub const_defs: u64,
    /// Constant array definitions
    pub const_array_defs: u64,
    /// Expression initializers in constant definitions
    pub const_init_exprs: u64,
    /// List initializers in constant definitions
    pub const_init_lists: u64,
    /// Variable declarations
    pub var_decls: u64,
    /// Variable definitions
    pub var_defs: u64,
    /// Variable array definitions
    pub var_array_defs: u64,
    /// Expression initializers in variable definitions
    pub var_init_exprs: u64,
    /// List initializers in variable definitions
    pub var_init_lists: u64,
    /// `void` function definitions
    pub void_func_defs: u64,
    /// `int` function definitions, `main` included
    pub int_func_defs: u64,
    /// Function parameters
    pub func_params: u64,
    /// Array-typed function parameters
    pub func_array_params: u64,
    /// Largest parameter count of any single function
    pub func_params_max: u64,
    /// Declarations inside function bodies
    pub local_decls: u64,
    /// Assignment statements
    pub assign_stmts: u64,
    /// Expression statements
    pub expr_stmts: u64,
    /// Block statements
    pub block_stmts: u64,
    /// `if` statements without `else`
    pub if_stmts: u64,
    /// `if`-`else` statements
    pub if_else_stmts: u64,
    /// `while` statements
    pub while_stmts: u64,
    /// `break` statements
    pub break_stmts: u64,
    /// `continue` statements
    pub continue_stmts: u64,
    /// `return` statements
    pub return_stmts: u64,
    /// Array element accesses
    pub array_accesses: u64,
    /// Parenthesized expressions
    pub paren_exprs: u64,
    /// Function calls
    pub func_calls: u64,
    /// Unary expressions
    pub unary_exprs: u64,
    /// Multiplicative expressions (`*`, `/`, `%`)
    pub mul_exprs: u64,
    /// Additive expressions (`+`, `-`)
    pub add_exprs: u64,
    /// Relational expressions
    pub rel_exprs: u64,
    /// Equality expressions
    pub eq_exprs: u64,
    /// Logical AND expressions
    pub land_exprs: u64,
    /// Logical OR expressions
    pub lor_exprs: u64,
    /// Constant expressions
    pub const_exprs: u64,
}

/// Statistics for one file: typed counters plus the set of grammar
/// fields that were actually present in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRecord {
    /// Lexical counters, when the analyzer emitted them
    pub lexical: Option<LexicalStats>,
    /// Grammar counters
    pub grammar: GrammarStats,
    present: BTreeSet<String>,
}

impl StatRecord {
    /// Build a record from typed counters. Every grammar field counts as present.
    pub fn from_grammar(grammar: GrammarStats) -> Self {
        let present = match serde_json::to_value(grammar) {
            Ok(Value::Object(map)) => map.keys().cloned().collect(),
            _ => BTreeSet::new(),
        };
        Self {
            lexical: None,
            grammar,
            present,
        }
    }

    /// Build a record from the raw `stat` value of the entry for `file`.
    pub fn from_value(file: &str, value: Value) -> Result<Self> {
        let invalid = |source: serde_json::Error| ClassifyError::InvalidStat {
            file: file.to_string(),
            source,
        };

        let mut stat: Map<String, Value> = serde_json::from_value(value).map_err(invalid)?;

        let (grammar, lexical) = match stat.remove("grammar") {
            Some(grammar) => (
                serde_json::from_value::<Map<String, Value>>(grammar).map_err(invalid)?,
                stat.remove("lexical"),
            ),
            None => (stat, None),
        };

        let grammar = normalize_flags(grammar);
        let present = grammar.keys().cloned().collect();
        let grammar: GrammarStats =
            serde_json::from_value(Value::Object(grammar)).map_err(invalid)?;

        // No category reads lexical counters, so a bad block is dropped, not fatal.
        let lexical = match lexical {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => {
                let map = Value::Object(normalize_flags(map));
                match serde_json::from_value::<LexicalStats>(map) {
                    Ok(lexical) => Some(lexical),
                    Err(e) => {
                        log::warn!("{}: ignoring malformed lexical statistics: {}", file, e);
                        None
                    }
                }
            }
            Some(other) => {
                log::warn!("{}: ignoring non-object lexical statistics: {}", file, other);
                None
            }
        };

        Ok(Self {
            lexical,
            grammar,
            present,
        })
    }

    /// Whether the input carried the grammar counter `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.present.contains(field)
    }
}

/// Rewrite boolean flags as 0/1 counts.
fn normalize_flags(mut map: Map<String, Value>) -> Map<String, Value> {
    for value in map.values_mut() {
        if let Value::Bool(flag) = *value {
            *value = Value::from(u64::from(flag));
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_record() {
        let record = StatRecord::from_value(
            "a.sy",
            json!({
                "lexical": { "ids": 3, "decimals": 2 },
                "grammar": { "unary_exprs": 1, "while_stmts": 2 }
            }),
        )
        .unwrap();

        assert_eq!(record.grammar.unary_exprs, 1);
        assert_eq!(record.grammar.while_stmts, 2);
        assert_eq!(record.grammar.add_exprs, 0);
        assert_eq!(record.lexical.unwrap().ids, 3);
        assert!(record.has_field("unary_exprs"));
        assert!(!record.has_field("add_exprs"));
    }

    #[test]
    fn test_flat_record() {
        let record =
            StatRecord::from_value("a.sy", json!({ "if_stmts": 1, "var_decls": 4 })).unwrap();

        assert!(record.lexical.is_none());
        assert_eq!(record.grammar.if_stmts, 1);
        assert_eq!(record.grammar.var_decls, 4);
        assert!(record.has_field("if_stmts"));
    }

    #[test]
    fn test_boolean_flags_become_counts() {
        let record = StatRecord::from_value(
            "a.sy",
            json!({ "func_array_params": true, "array_accesses": false }),
        )
        .unwrap();

        assert_eq!(record.grammar.func_array_params, 1);
        assert_eq!(record.grammar.array_accesses, 0);
        assert!(record.has_field("array_accesses"));
    }

    #[test]
    fn test_unusable_lexical_block_is_ignored() {
        for lexical in [json!(null), json!("n/a"), json!({ "ids": -3 })] {
            let record = StatRecord::from_value(
                "l.sy",
                json!({ "lexical": lexical, "grammar": { "unary_exprs": 2 } }),
            )
            .unwrap();

            assert!(record.lexical.is_none());
            assert_eq!(record.grammar.unary_exprs, 2);
        }
    }

    #[test]
    fn test_non_object_stat_is_invalid() {
        let err = StatRecord::from_value("a.sy", json!("oops")).unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidStat { ref file, .. } if file == "a.sy"));
    }

    #[test]
    fn test_negative_counter_is_invalid() {
        let err = StatRecord::from_value("b.sy", json!({ "unary_exprs": -1 })).unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidStat { .. }));
    }

    #[test]
    fn test_from_grammar_marks_all_fields_present() {
        let record = StatRecord::from_grammar(GrammarStats::default());
        assert!(record.has_field("unary_exprs"));
        assert!(record.has_field("func_array_params"));
        assert!(record.has_field("const_exprs"));
    }
}
