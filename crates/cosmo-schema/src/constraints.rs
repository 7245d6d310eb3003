//! # Constraint Vocabulary
//!
//! The building blocks of the per-kind constraint tables in
//! [`crate::tables`]. A table is plain static data: an [`ObjectSchema`]
//! lists [`FieldRule`]s (name, kind, required/nullable flags, default rule)
//! and the [`CrossFieldRule`]s of the type. The generic engine in
//! [`crate::engine`] is the only code that interprets them.
//!
//! ## Severity Policy
//!
//! | Violation | Severity |
//! |-----------|----------|
//! | missing required field, wrong JSON type | error |
//! | word outside a vocabulary | error |
//! | malformed hex color or timestamp | error |
//! | string longer than its maximum | error |
//! | list longer (or shorter) than its bounds | error |
//! | number outside its recommended range | warning |
//! | cross-field override (e.g. priority forces dismissible) | warning |
//! | unknown field | warning |

use serde_json::{Map, Value};

use cosmo_core::Vocabulary;

use crate::issue::Severity;

/// Inclusive numeric window. Values outside are clamped by sanitize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Range {
    /// Construct a range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True if `x` lies inside the window.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Clamp `x` into the window.
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// The shape a field's value must have.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Non-blank identifier. Generated as `<prefix>-<digits>` when missing;
    /// `None` means "use the component kind's prefix".
    Identifier {
        /// Prefix for generated values.
        prefix: Option<&'static str>,
        /// Maximum length in characters.
        max_len: usize,
    },
    /// Free text with a hard length cap (in characters).
    Text {
        /// Maximum length in characters.
        max_len: usize,
    },
    /// JSON number with a recommended window.
    Number {
        /// Recommended window.
        range: Range,
        /// Whole numbers only.
        integer: bool,
    },
    /// JSON boolean.
    Boolean,
    /// One word out of a closed vocabulary.
    Choice {
        /// Vocabulary name for diagnostics.
        vocabulary: &'static str,
        /// Allowed words.
        options: &'static [&'static str],
    },
    /// `#rgb` or `#rrggbb`.
    HexColor,
    /// RFC 3339 date-time.
    Timestamp,
    /// Nested object with its own rules.
    Object(&'static ObjectSchema),
    /// Array of objects.
    List {
        /// Rules for each item.
        item: &'static ObjectSchema,
        /// Minimum item count.
        min: usize,
        /// Maximum item count.
        max: usize,
    },
}

impl FieldKind {
    /// Human name of the expected JSON shape.
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Identifier { .. } | Self::Text { .. } | Self::Choice { .. } => "string",
            Self::HexColor | Self::Timestamp => "string",
            Self::Number { integer: true, .. } => "integer",
            Self::Number { .. } => "number",
            Self::Boolean => "boolean",
            Self::Object(_) => "object",
            Self::List { .. } => "array",
        }
    }
}

/// A contextual default: computed from the already-repaired siblings.
pub type DeriveFn = fn(&Map<String, Value>) -> Value;

/// What sanitize fills in when a field is missing or unrepairable.
#[derive(Clone, Copy)]
pub enum DefaultRule {
    /// Leave the field out.
    Absent,
    /// Explicit `null`.
    Null,
    /// Constant boolean.
    Bool(bool),
    /// Constant number.
    Number(f64),
    /// Constant string (a vocabulary word, or `""` for required text the
    /// caller never supplied).
    Text(&'static str),
    /// Empty array.
    EmptyList,
    /// Computed from the repaired sibling fields.
    Derived(DeriveFn),
}

impl DefaultRule {
    /// Materialize the default, or `None` for [`DefaultRule::Absent`].
    pub fn resolve(&self, siblings: &Map<String, Value>) -> Option<Value> {
        match self {
            Self::Absent => None,
            Self::Null => Some(Value::Null),
            Self::Bool(b) => Some(Value::Bool(*b)),
            Self::Number(n) => Some(json_number(*n)),
            Self::Text(s) => Some(Value::String((*s).to_string())),
            Self::EmptyList => Some(Value::Array(Vec::new())),
            Self::Derived(derive) => Some(derive(siblings)),
        }
    }
}

impl std::fmt::Debug for DefaultRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Number(n) => write!(f, "Number({n})"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::EmptyList => f.write_str("EmptyList"),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// One row of a constraint table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Wire name (camelCase).
    pub name: &'static str,
    /// Expected shape.
    pub kind: FieldKind,
    /// Missing, `null` or blank is an error.
    pub required: bool,
    /// `null` is a legitimate value, distinct from absence.
    pub nullable: bool,
    /// For optional text: present-but-blank is an error.
    pub non_empty: bool,
    /// Sanitize fallback.
    pub default: DefaultRule,
}

impl FieldRule {
    /// A required field with the fallback sanitize uses when it is missing.
    pub const fn required(name: &'static str, kind: FieldKind, fallback: DefaultRule) -> Self {
        Self {
            name,
            kind,
            required: true,
            nullable: false,
            non_empty: true,
            default: fallback,
        }
    }

    /// An optional field.
    pub const fn optional(name: &'static str, kind: FieldKind, default: DefaultRule) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: false,
            non_empty: false,
            default,
        }
    }

    /// Accept explicit `null`.
    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    /// Reject present-but-blank strings.
    pub const fn non_empty(self) -> Self {
        Self {
            non_empty: true,
            ..self
        }
    }
}

/// A rule spanning several fields of one object.
#[derive(Clone, Copy)]
pub struct CrossFieldRule {
    /// Field the issue is reported against.
    pub field: &'static str,
    /// Severity of a violation.
    pub severity: Severity,
    /// Inspect the raw candidate; `Some(message)` on violation. Must not
    /// assume any field has the right type.
    pub check: fn(&Map<String, Value>) -> Option<String>,
    /// Enforce the rule on an already field-repaired object.
    pub repair: fn(&mut Map<String, Value>),
}

impl std::fmt::Debug for CrossFieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrossFieldRule")
            .field("field", &self.field)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

/// The constraint table of one object shape.
#[derive(Debug)]
pub struct ObjectSchema {
    /// Display name (e.g. `HUDCard`, `Action`).
    pub name: &'static str,
    /// Field rules in evaluation order. Derived defaults may only read
    /// fields declared before them.
    pub fields: &'static [FieldRule],
    /// Cross-field rules, applied after every field is repaired.
    pub rules: &'static [CrossFieldRule],
}

impl ObjectSchema {
    /// Look up a field rule by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.name == name)
    }

    /// True if the table declares `name`.
    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

// ─── Table helpers ───────────────────────────────────────────────────

/// Identifier using the component kind's prefix.
pub const fn record_id() -> FieldKind {
    FieldKind::Identifier {
        prefix: None,
        max_len: 64,
    }
}

/// Identifier with an explicit prefix (list items).
pub const fn item_id(prefix: &'static str) -> FieldKind {
    FieldKind::Identifier {
        prefix: Some(prefix),
        max_len: 64,
    }
}

/// Text capped at `max_len` characters.
pub const fn text(max_len: usize) -> FieldKind {
    FieldKind::Text { max_len }
}

/// Real number in `[min, max]`.
pub const fn number(min: f64, max: f64) -> FieldKind {
    FieldKind::Number {
        range: Range::new(min, max),
        integer: false,
    }
}

/// Whole number in `[min, max]`.
pub const fn integer(min: f64, max: f64) -> FieldKind {
    FieldKind::Number {
        range: Range::new(min, max),
        integer: true,
    }
}

/// One word of vocabulary `V`.
pub const fn choice<V: Vocabulary>() -> FieldKind {
    FieldKind::Choice {
        vocabulary: V::NAME,
        options: V::VALUES,
    }
}

/// Array of `item` objects with `min..=max` entries.
pub const fn list(item: &'static ObjectSchema, min: usize, max: usize) -> FieldKind {
    FieldKind::List { item, min, max }
}

/// Render an `f64` as a JSON number, keeping whole values integral.
pub fn json_number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}
