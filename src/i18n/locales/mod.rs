//! Compiled-in dictionaries, one module per language.

mod de;
mod en;
mod es;
mod fr;
mod it;

pub use de::DE;
pub use en::EN;
pub use es::ES;
pub use fr::FR;
pub use it::IT;

use super::{Locale, Translations};

/// Every built-in dictionary, keyed by locale.
pub static BUILTIN: [(Locale, &Translations); 5] = [
    (Locale::En, &EN),
    (Locale::Fr, &FR),
    (Locale::Es, &ES),
    (Locale::De, &DE),
    (Locale::It, &IT),
];
