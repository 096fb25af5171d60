//! ListRow trait for items displayed by a content list.

/// Trait for items that can be displayed as rows in a [`ContentList`].
///
/// The list never inspects row fields directly. Identity comes from
/// [`id`](ListRow::id) and everything else goes through the cell renderers
/// registered on the columns.
///
/// # Examples
///
/// ```
/// use content_list::ListRow;
///
/// #[derive(Clone, Debug)]
/// struct Client {
///     id: u64,
///     name: String,
/// }
///
/// impl ListRow for Client {
///     fn id(&self) -> String {
///         self.id.to_string()
///     }
/// }
/// ```
///
/// [`ContentList`]: crate::ContentList
pub trait ListRow: Send + Sync + Clone + 'static {
    /// Stable identifier for this row.
    ///
    /// Selection is keyed by this value, so two clones of the same record
    /// (e.g. refetched after a page change) are treated as the same row.
    fn id(&self) -> String;
}
