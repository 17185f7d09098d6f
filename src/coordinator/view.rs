use crate::catalog::Candidate;

/// Presentation adapter driven by the coordinator
///
/// The coordinator never touches widgets directly; everything it shows goes
/// through these calls.
pub trait SearchView {
    /// Raw text currently in the input
    fn query(&self) -> String;

    /// Replace the input text (used when a suggestion is picked or on reset)
    fn set_query(&mut self, query: &str);

    /// Show `suggestions` in the dropdown; an empty slice closes it
    fn set_suggestions(&mut self, suggestions: &[Candidate]);

    fn set_item_visible(&mut self, id: &str, visible: bool);
}
