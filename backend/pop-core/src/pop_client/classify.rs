//! Detail-to-message mapping for resource operations.
//!
//! The catalog reports failures as free text in `detail`. Every operation
//! declares one `ErrorContext` naming its message prefix and the substrings it
//! rewrites, so matching on text stays confined to this table.

const NOT_FOUND_MARKER: &str = "not found";

#[derive(Debug, Clone, Copy)]
pub(crate) struct ErrorContext {
    prefix: &'static str,
    markers: &'static [(&'static str, &'static str)],
    collapse_not_found: bool,
}

impl ErrorContext {
    /// Register, update and delete operations: any "not found" detail
    /// collapses to `Not found`.
    pub(crate) const fn mutation(
        prefix: &'static str,
        markers: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            prefix,
            markers,
            collapse_not_found: true,
        }
    }

    /// Listing and search: the detail is passed through as-is.
    pub(crate) const fn query(prefix: &'static str) -> Self {
        Self {
            prefix,
            markers: &[],
            collapse_not_found: false,
        }
    }

    pub(crate) fn describe(&self, detail: &str) -> String {
        if let Some((_, replacement)) = self
            .markers
            .iter()
            .find(|(marker, _)| detail.contains(marker))
        {
            return format!("{}: {}", self.prefix, replacement);
        }

        if self.collapse_not_found && detail.to_ascii_lowercase().contains(NOT_FOUND_MARKER) {
            return format!("{}: Not found", self.prefix);
        }

        format!("{}: {}", self.prefix, detail)
    }
}
