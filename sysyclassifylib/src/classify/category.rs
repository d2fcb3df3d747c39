//! The fixed category table.
//!
//! Each category is a named predicate over a file's grammar counters. The
//! order of [`CATEGORIES`] is the column order of every rendered table.

use std::fmt;

use super::options::{Language, Strictness};
use crate::data::{GrammarStats, StatRecord};
use crate::error::ClassifyError;
use crate::Result;

/// Lazy, field-checked access to one record's grammar counters.
///
/// Predicates read counters through [`Counters::read`] (usually via the
/// `count!` macro), so a counter is only required when a predicate actually
/// reaches it. `a > 0 || b > 0` with `a` set never looks at `b`.
pub struct Counters<'a> {
    file: &'a str,
    record: &'a StatRecord,
    strictness: Strictness,
}

impl<'a> Counters<'a> {
    pub fn new(file: &'a str, record: &'a StatRecord, strictness: Strictness) -> Self {
        Self {
            file,
            record,
            strictness,
        }
    }

    /// Read the counter `field`, failing in strict mode when the input lacks it.
    pub fn read(&self, field: &'static str, value: fn(&GrammarStats) -> u64) -> Result<u64> {
        if !self.record.has_field(field) {
            match self.strictness {
                Strictness::Strict => {
                    return Err(ClassifyError::FieldMissing {
                        file: self.file.to_string(),
                        field: field.to_string(),
                    })
                }
                Strictness::Lenient => {
                    log::warn!("{}: missing '{}', reading it as 0", self.file, field)
                }
            }
        }
        Ok(value(&self.record.grammar))
    }
}

macro_rules! count {
    ($counters:expr, $field:ident) => {
        $counters.read(stringify!($field), |g| g.$field)?
    };
}

/// A report column: labels and its predicate.
#[derive(Clone, Copy)]
pub struct Category {
    /// Stable identifier
    pub key: &'static str,
    /// Chinese column label
    pub label_zh: &'static str,
    /// English column label
    pub label_en: &'static str,
    /// Whether a file exercises this category
    pub predicate: fn(&Counters<'_>) -> Result<bool>,
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Category")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl Category {
    /// Column label in the given language.
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Chinese => self.label_zh,
            Language::English => self.label_en,
        }
    }

    /// Apply the predicate.
    pub fn matches(&self, counters: &Counters<'_>) -> Result<bool> {
        (self.predicate)(counters)
    }
}

/// Label of the leading file-name column.
pub fn lead_label(language: Language) -> &'static str {
    match language {
        Language::Chinese => "文件名",
        Language::English => "File",
    }
}

fn unary(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, unary_exprs) > 0)
}

fn mul_div_mod(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, mul_exprs) > 0)
}

fn add_sub(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, add_exprs) > 0)
}

fn comparison(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, rel_exprs) > 0 || count!(c, eq_exprs) > 0)
}

fn logical(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, land_exprs) > 0 || count!(c, lor_exprs) > 0)
}

fn constant(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, const_decls) > 0)
}

fn variable(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, var_decls) > 0)
}

fn assign(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, assign_stmts) > 0)
}

fn block(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, block_stmts) > 0)
}

fn branch(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, if_stmts) > 0 || count!(c, if_else_stmts) > 0)
}

fn loop_(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, while_stmts) > 0)
}

// `main` is always one int function, so a second one is needed.
fn function(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, void_func_defs) > 0 || count!(c, int_func_defs) > 1 || count!(c, func_calls) > 0)
}

// Widened so huge counters cannot overflow the sum.
fn global(c: &Counters<'_>) -> Result<bool> {
    let declared = u128::from(count!(c, const_decls)) + u128::from(count!(c, var_decls));
    Ok(declared > u128::from(count!(c, local_decls)))
}

fn params(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, func_params_max) > 4 || count!(c, func_array_params) > 0)
}

fn array(c: &Counters<'_>) -> Result<bool> {
    Ok(count!(c, const_array_defs) > 0
        || count!(c, var_array_defs) > 0
        || count!(c, func_array_params) > 0
        || count!(c, array_accesses) > 0)
}

/// All categories, in column order.
pub static CATEGORIES: &[Category] = &[
    Category {
        key: "unary",
        label_zh: "一元运算",
        label_en: "Unary",
        predicate: unary,
    },
    Category {
        key: "mul_div_mod",
        label_zh: "乘除模运算",
        label_en: "MulDivMod",
        predicate: mul_div_mod,
    },
    Category {
        key: "add_sub",
        label_zh: "加减运算",
        label_en: "AddSub",
        predicate: add_sub,
    },
    Category {
        key: "comparison",
        label_zh: "比较运算",
        label_en: "Comparison",
        predicate: comparison,
    },
    Category {
        key: "logical",
        label_zh: "逻辑运算",
        label_en: "Logical",
        predicate: logical,
    },
    Category {
        key: "const",
        label_zh: "常量",
        label_en: "Const",
        predicate: constant,
    },
    Category {
        key: "var",
        label_zh: "变量",
        label_en: "Var",
        predicate: variable,
    },
    Category {
        key: "assign",
        label_zh: "赋值",
        label_en: "Assign",
        predicate: assign,
    },
    Category {
        key: "block",
        label_zh: "语句块",
        label_en: "Block",
        predicate: block,
    },
    Category {
        key: "branch",
        label_zh: "分支",
        label_en: "Branch",
        predicate: branch,
    },
    Category {
        key: "loop",
        label_zh: "循环",
        label_en: "Loop",
        predicate: loop_,
    },
    Category {
        key: "function",
        label_zh: "函数",
        label_en: "Function",
        predicate: function,
    },
    Category {
        key: "global",
        label_zh: "全局量",
        label_en: "Global",
        predicate: global,
    },
    Category {
        key: "params",
        label_zh: "参数",
        label_en: "Params",
        predicate: params,
    },
    Category {
        key: "array",
        label_zh: "数组",
        label_en: "Array",
        predicate: array,
    },
];

/// Evaluate every category against the record of `file`, in column order.
pub fn evaluate_categories(
    file: &str,
    record: &StatRecord,
    strictness: Strictness,
) -> Result<Vec<bool>> {
    let counters = Counters::new(file, record, strictness);
    CATEGORIES
        .iter()
        .map(|category| category.matches(&counters))
        .collect()
}
