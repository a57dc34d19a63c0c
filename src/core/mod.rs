//! Pure modules with no `web_sys` dependency. Host-side tests include these
//! files directly, so each stays self-contained apart from sibling imports.

pub mod content;
pub mod countdown;
pub mod markup;
pub mod particles;
pub mod waves;
