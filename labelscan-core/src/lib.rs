pub mod additives;
pub mod allergens;
pub mod flags;
pub mod label_parser;
pub mod normalize;
pub mod section;
pub mod types;

pub use additives::{additive_name, extract_additives, MSG_LIKE};
pub use allergens::{extract_allergens, ALLERGENS};
pub use flags::compute_flags;
pub use label_parser::{parse_label, parse_label_with_options, ParseOptions};
pub use normalize::normalize;
pub use section::{find_section, ingredients_block};
pub use types::{Additive, Flags, Ingredient, Label};
