//! Card asset identifiers and the startup asset catalog.
//!
//! Asset identifiers follow the image naming convention
//! `{color}{symbol}{shading}{number}.gif`, for example
//! `redsquiggleempty3.gif` or `purovalshaded1.gif`. The color may be written
//! in full or abbreviated to its first three letters.
//!
//! The catalog is the only place identifiers are decoded. Anything that does
//! not decode cleanly is rejected here, so the game only ever sees complete
//! [`Card`] values.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::card::{ALL_SHADINGS, ALL_SYMBOLS, Card, Color, Number};
use crate::deck::build_deck;
use crate::error::AssetError;

/// File extension of card images.
pub const ASSET_EXTENSION: &str = ".gif";

fn parse_color(text: &str) -> Option<Color> {
    match text {
        "red" => Some(Color::Red),
        "gre" | "green" => Some(Color::Green),
        "pur" | "purple" => Some(Color::Purple),
        _ => None,
    }
}

/// Decodes an asset identifier into a card.
///
/// # Errors
///
/// Returns [`AssetError::MalformedId`] if the identifier does not name
/// exactly one color, symbol, shading and number.
///
/// # Example
///
/// ```
/// use setrs::asset::parse_asset_id;
/// use setrs::{Color, Number, Shading, Symbol};
///
/// let card = parse_asset_id("greovalfilled2.gif").unwrap();
/// assert_eq!(card.color, Color::Green);
/// assert_eq!(card.symbol, Symbol::Oval);
/// assert_eq!(card.shading, Shading::Filled);
/// assert_eq!(card.number, Number::Two);
/// ```
pub fn parse_asset_id(id: &str) -> Result<Card, AssetError> {
    let malformed = || AssetError::MalformedId(id.to_string());

    let stem = id.strip_suffix(ASSET_EXTENSION).ok_or_else(malformed)?;

    let mut matches = ALL_SYMBOLS
        .iter()
        .filter_map(|&symbol| stem.split_once(symbol.name()).map(|parts| (symbol, parts)));
    let (symbol, (color_part, rest)) = matches.next().ok_or_else(malformed)?;
    if matches.next().is_some() {
        return Err(malformed());
    }

    let color = parse_color(color_part).ok_or_else(malformed)?;

    let digit_at = rest.len().checked_sub(1).ok_or_else(malformed)?;
    if !rest.is_char_boundary(digit_at) {
        return Err(malformed());
    }
    let (shading_part, digit) = rest.split_at(digit_at);
    let shading = ALL_SHADINGS
        .into_iter()
        .find(|shading| shading.name() == shading_part)
        .ok_or_else(malformed)?;
    let number = digit
        .parse::<u8>()
        .ok()
        .and_then(Number::from_count)
        .ok_or_else(malformed)?;

    Ok(Card::new(color, symbol, shading, number))
}

/// Maps every card to the identifier of its image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    ids: BTreeMap<Card, String>,
}

impl AssetCatalog {
    /// Builds a catalog that uses each card's canonical identifier.
    #[must_use]
    pub fn canonical() -> Self {
        let ids = build_deck()
            .into_iter()
            .map(|card| (card, card.asset_id()))
            .collect();
        Self { ids }
    }

    /// Builds a catalog from asset identifiers.
    ///
    /// Entries without the [`ASSET_EXTENSION`] are not card images and are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if an image identifier is malformed, two images
    /// decode into the same card, or any of the 81 cards has no image.
    pub fn from_ids<I, S>(ids: I) -> Result<Self, AssetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = BTreeMap::new();

        for id in ids {
            let id = id.as_ref();
            if !id.ends_with(ASSET_EXTENSION) {
                log::trace!("skipping non-card asset {id}");
                continue;
            }
            let card = parse_asset_id(id)?;
            if catalog.insert(card, id.to_string()).is_some() {
                return Err(AssetError::Duplicate(card.to_string()));
            }
        }

        if let Some(card) = build_deck()
            .into_iter()
            .find(|card| !catalog.contains_key(card))
        {
            return Err(AssetError::Missing(card));
        }

        log::debug!("loaded {} card assets", catalog.len());
        Ok(Self { ids: catalog })
    }

    /// Builds a catalog from the file names in a directory.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Io`] if the directory cannot be listed, or any
    /// error from [`AssetCatalog::from_ids`].
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn from_dir(dir: impl AsRef<std::path::Path>) -> Result<Self, AssetError> {
        let entries =
            std::fs::read_dir(dir.as_ref()).map_err(|err| AssetError::Io(err.to_string()))?;

        let mut names = alloc::vec::Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| AssetError::Io(err.to_string()))?;
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        Self::from_ids(names)
    }

    /// Returns the identifier of a card's image.
    #[must_use]
    pub fn resolve(&self, card: &Card) -> Option<&str> {
        self.ids.get(card).map(String::as_str)
    }

    /// Returns the number of cards with an image.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
