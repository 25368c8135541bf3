/// Options for building endpoint URLs from the registration base URL and
/// path segments.
///
/// The default preserves any existing query/fragment and does not trim
/// trailing empty path segments.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BuildUrlOptions {
    /// When true, clear any existing query string on the base URL.
    pub clear_query: bool,
    /// When true, clear any existing fragment (`#...`) on the base URL.
    pub clear_fragment: bool,
    /// When true, drop a trailing empty path segment before appending segments.
    pub pop_if_empty: bool,
}

impl BuildUrlOptions {
    /// Preset for the blocking client; trims an empty trailing segment so a
    /// base URL given as `.../rreg/` resolves the same as `.../rreg`.
    pub const SYNC_CLIENT: Self = Self {
        clear_query: false,
        clear_fragment: false,
        pop_if_empty: true,
    };

    /// Preset for the async client; additionally drops query and fragment.
    #[cfg_attr(not(feature = "async-client"), allow(dead_code))]
    pub const ASYNC_CLIENT: Self = Self {
        clear_query: true,
        clear_fragment: true,
        pop_if_empty: true,
    };
}
