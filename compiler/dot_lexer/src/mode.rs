//! Scanner mode flags.

use bitflags::bitflags;

bitflags! {
    /// Controls optional scanner behavior.
    ///
    /// The default mode skips comments.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Mode: u8 {
        /// Return comments as tokens of the `"comment"` kind.
        const SCAN_COMMENTS = 1 << 0;
    }
}
