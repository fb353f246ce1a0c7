//! Generic label/code lookup over a finite enumeration.

use findata_types::MappingError;

/// A finite set of values, each with a display label and a provider code.
///
/// Implementors only list their members and spell out the two strings; the
/// lookups in both directions are shared.
pub trait CodeTable: Sized + Copy + 'static {
    /// Table name used in error messages.
    const KIND: &'static str;

    /// Returns every member of the table.
    fn all() -> &'static [Self];

    /// Human-facing label.
    fn label(&self) -> &'static str;

    /// Provider-specific code.
    fn code(&self) -> &'static str;

    /// Additional labels accepted by [`CodeTable::from_label`].
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Looks up a member by label or alias (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Unknown`] if no member matches.
    fn from_label(label: &str) -> Result<Self, MappingError> {
        let wanted = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|m| {
                m.label().eq_ignore_ascii_case(wanted)
                    || m.aliases().iter().any(|a| a.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| MappingError::unknown(Self::KIND, label))
    }

    /// Looks up a member by provider code (exact match).
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Unknown`] if no member has this code.
    fn from_code(code: &str) -> Result<Self, MappingError> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.code() == code)
            .ok_or_else(|| MappingError::unknown(Self::KIND, code))
    }

    /// Maps a label straight to its provider code.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Unknown`] if the label is not in the table.
    fn code_for(label: &str) -> Result<&'static str, MappingError> {
        Self::from_label(label).map(|m| m.code())
    }
}
