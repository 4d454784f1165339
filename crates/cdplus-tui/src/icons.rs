//! Icon glyphs for listing rows.

use cdplus_core::fs::entry::IconClass;

/// Returns the emoji prefix for a row.
pub fn icon_for(class: IconClass) -> &'static str {
    match class {
        IconClass::ParentMarker => "\u{2b06}\u{fe0f} ", // up arrow
        IconClass::Directory => "\u{1f4c1} ",           // folder
        IconClass::File => "\u{1f4c4} ",                // page
    }
}

/// Plain-text prefix used when icons are disabled.
pub fn plain_prefix(class: IconClass) -> &'static str {
    match class {
        IconClass::ParentMarker | IconClass::Directory => "/",
        IconClass::File => " ",
    }
}
