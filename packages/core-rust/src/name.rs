//! Service name transforms: camel-case to underscore, default-namespace
//! qualification, and system-service detection.

/// Marker that routes a qualified name to the system-service executor.
/// Matched case-insensitively anywhere in the name.
pub const SYSTEM_SERVICE_MARKER: &str = "LEALONE_SYSTEM_SERVICE";

/// Default database and schema used to qualify partial service names.
///
/// Either part may be absent. Qualification only prefixes the parts that are
/// configured and never rewrites a name that is already fully qualified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultNamespace {
    /// Database prepended to names lacking a database segment.
    pub database: Option<String>,
    /// Schema prepended (together with the database) to bare names.
    pub schema: Option<String>,
}

impl DefaultNamespace {
    /// Creates a namespace from optional database and schema defaults.
    #[must_use]
    pub fn new(database: Option<String>, schema: Option<String>) -> Self {
        Self { database, schema }
    }

    /// Qualifies a structured-call service name (`service`, `schema.service`,
    /// or `database.schema.service`).
    ///
    /// One segment with both defaults becomes `db.schema.service`; two
    /// segments with a default database become `db.schema.service`.
    #[must_use]
    pub fn qualify_service_name(&self, name: &str) -> String {
        self.qualify(name, 1)
    }

    /// Qualifies an encoded-command name, whose last segment is the method.
    ///
    /// Thresholds are one higher than [`qualify_service_name`](Self::qualify_service_name):
    /// two segments (`service.method`) take both defaults, three segments take
    /// the database only.
    #[must_use]
    pub fn qualify_command_name(&self, name: &str) -> String {
        self.qualify(name, 2)
    }

    fn qualify(&self, name: &str, bare_segments: usize) -> String {
        let segments = segment_count(name);
        match (&self.database, &self.schema) {
            (Some(db), Some(schema)) if segments == bare_segments => {
                format!("{db}.{schema}.{name}")
            }
            (Some(db), _) if segments == bare_segments + 1 => format!("{db}.{name}"),
            _ => name.to_string(),
        }
    }
}

/// Number of `.`-separated segments. The empty string has none.
fn segment_count(name: &str) -> usize {
    if name.is_empty() {
        0
    } else {
        name.split('.').count()
    }
}

/// Converts a camel-case name into underscore form for service lookup.
///
/// Each uppercase letter is lower-cased and preceded by `_`, except at the
/// start of the name or of a dotted segment, or right after an existing `_`.
/// The transform is one-way and idempotent on already-underscored input.
#[must_use]
pub fn to_underscore(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_uppercase() {
            if !matches!(prev, None | Some('.' | '_')) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Returns `true` if the name targets the reserved system-service namespace.
#[must_use]
pub fn is_system_service(name: &str) -> bool {
    name.to_uppercase().contains(SYSTEM_SERVICE_MARKER)
}
