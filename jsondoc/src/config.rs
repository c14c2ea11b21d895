// SPDX-License-Identifier: Apache-2.0

//! Parser configuration.
//!
//! [`ParserConfig`] bundles the nesting limit with the relaxations a reader
//! may opt into. The default is strict RFC 8259: no comments, no trailing
//! commas, no NaN/Infinity and exactly one document per input.

/// Default maximum nesting depth of arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options controlling a single parse call.
///
/// All builder methods are `const`, so configurations can live in constants:
///
/// ```
/// use jsondoc::ParserConfig;
///
/// const NDJSON: ParserConfig = ParserConfig::new().stop_when_done(true);
/// assert!(NDJSON.is_stop_when_done());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    max_depth: usize,
    stop_when_done: bool,
    allow_trailing_commas: bool,
    allow_comments: bool,
    allow_inf_and_nan: bool,
    big_integers_as_u64: bool,
}

impl ParserConfig {
    /// Strict RFC 8259 parsing with [`DEFAULT_MAX_DEPTH`].
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            stop_when_done: false,
            allow_trailing_commas: false,
            allow_comments: false,
            allow_inf_and_nan: false,
            big_integers_as_u64: false,
        }
    }

    /// Same as [`ParserConfig::new`].
    pub const fn strict() -> Self {
        Self::new()
    }

    /// Every relaxation enabled, for hand-written or debugging input.
    pub const fn lenient() -> Self {
        Self::new()
            .allow_trailing_commas(true)
            .allow_comments(true)
            .allow_inf_and_nan(true)
            .big_integers_as_u64(true)
    }

    /// Maximum number of containers that may enclose any position.
    /// `0` accepts scalar documents only.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Stop after the root value instead of rejecting trailing content.
    pub const fn stop_when_done(mut self, enabled: bool) -> Self {
        self.stop_when_done = enabled;
        self
    }

    /// Accept a single trailing comma, as in `[1,2,]` or `{"a":1,}`.
    pub const fn allow_trailing_commas(mut self, enabled: bool) -> Self {
        self.allow_trailing_commas = enabled;
        self
    }

    /// Treat `// line` and `/* block */` comments as whitespace.
    pub const fn allow_comments(mut self, enabled: bool) -> Self {
        self.allow_comments = enabled;
        self
    }

    /// Accept `NaN` and `Infinity` literals (case-insensitive, `inf` too) and
    /// numbers whose magnitude overflows `f64`.
    pub const fn allow_inf_and_nan(mut self, enabled: bool) -> Self {
        self.allow_inf_and_nan = enabled;
        self
    }

    /// Store positive integers above `i64::MAX` as
    /// [`JsonNumber::UInt`](crate::JsonNumber::UInt) instead of `Float`.
    pub const fn big_integers_as_u64(mut self, enabled: bool) -> Self {
        self.big_integers_as_u64 = enabled;
        self
    }

    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub const fn is_stop_when_done(&self) -> bool {
        self.stop_when_done
    }

    pub const fn is_allow_trailing_commas(&self) -> bool {
        self.allow_trailing_commas
    }

    pub const fn is_allow_comments(&self) -> bool {
        self.allow_comments
    }

    pub const fn is_allow_inf_and_nan(&self) -> bool {
        self.allow_inf_and_nan
    }

    pub const fn is_big_integers_as_u64(&self) -> bool {
        self.big_integers_as_u64
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
