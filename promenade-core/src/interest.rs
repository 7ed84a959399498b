//! Interest labels offered to visitors and the keyword stems behind them.
//!
//! Each label maps to a static set of lowercase stems. Stems are listed in
//! English and Russian because the reference catalog is Russian-language;
//! matching is by substring, so a stem such as `"art"` also hits
//! `"street-art"` and `"party"`.
//!
//! # Examples
//! ```
//! use promenade_core::Interest;
//!
//! assert_eq!(Interest::Food.as_str(), "Food");
//! assert_eq!("parks".parse::<Interest>(), Ok(Interest::Parks));
//! assert!(Interest::Any.keywords().is_empty());
//! ```

use thiserror::Error;

/// A visitor-facing interest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
    /// Historic sites, monuments and the kremlin.
    History,
    /// Notable buildings, cathedrals and churches.
    Architecture,
    /// Museums, galleries and exhibitions.
    Museums,
    /// Art and creative venues.
    Art,
    /// Theatres, concerts and cultural centres.
    Culture,
    /// Street art and graffiti.
    StreetArt,
    /// Parks, gardens and squares.
    Parks,
    /// Natural landscapes and viewpoints.
    Nature,
    /// Strolls and leisure spots.
    Leisure,
    /// Cafés, restaurants and bars.
    Food,
    /// Shopping streets and malls.
    Shopping,
    /// Individual shops.
    Stores,
    /// Cinemas, clubs and entertainment venues.
    Entertainment,
    /// Theatres and stage performances.
    Theatres,
    /// Cinemas and film venues.
    Cinema,
    /// No preference: every point of interest qualifies.
    Any,
}

/// Error returned when a label does not name an [`Interest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown interest '{label}'")]
pub struct InterestParseError {
    /// The rejected label.
    pub label: String,
}

impl Interest {
    /// Every interest in menu order, with [`Interest::Any`] last.
    pub const ALL: [Self; 16] = [
        Self::History,
        Self::Architecture,
        Self::Museums,
        Self::Art,
        Self::Culture,
        Self::StreetArt,
        Self::Parks,
        Self::Nature,
        Self::Leisure,
        Self::Food,
        Self::Shopping,
        Self::Stores,
        Self::Entertainment,
        Self::Theatres,
        Self::Cinema,
        Self::Any,
    ];

    /// Return the display label.
    ///
    /// # Examples
    /// ```
    /// use promenade_core::Interest;
    ///
    /// assert_eq!(Interest::Any.as_str(), "Any point of interest");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::History => "History",
            Self::Architecture => "Architecture",
            Self::Museums => "Museums",
            Self::Art => "Art",
            Self::Culture => "Culture",
            Self::StreetArt => "Street art",
            Self::Parks => "Parks",
            Self::Nature => "Nature",
            Self::Leisure => "Leisure",
            Self::Food => "Food",
            Self::Shopping => "Shopping",
            Self::Stores => "Stores",
            Self::Entertainment => "Entertainment",
            Self::Theatres => "Theatres",
            Self::Cinema => "Cinema",
            Self::Any => "Any point of interest",
        }
    }

    /// Lowercase keyword stems matched against catalog text.
    ///
    /// [`Interest::Any`] yields an empty slice, meaning "no filter".
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::History => &[
                "history", "historic", "museum", "monument", "kremlin", "история", "музей",
                "памятник", "кремль",
            ],
            Self::Architecture => &[
                "architecture", "building", "cathedral", "church", "архитектура", "здание",
                "собор", "церковь",
            ],
            Self::Museums => &[
                "museum", "gallery", "exhibition", "музей", "галерея", "выставка",
            ],
            Self::Art => &[
                "art", "culture", "creativ", "арт", "искусство", "культура", "творчество",
            ],
            Self::Culture => &[
                "culture", "theatre", "theater", "concert", "культура", "театр", "концерт",
            ],
            Self::StreetArt => &[
                "art", "street-art", "street art", "graffiti", "арт", "стрит-арт", "граффити",
                "уличное искусство",
            ],
            Self::Parks => &["park", "garden", "square", "парк", "сад", "сквер"],
            Self::Nature => &[
                "nature", "landscape", "view", "природа", "ландшафт", "вид",
            ],
            Self::Leisure => &[
                "leisure", "walk", "stroll", "recreation", "отдых", "прогулка", "развлечение",
            ],
            Self::Food => &[
                "cafe", "café", "restaurant", "food", "cuisine", "coffee", "bar", "bistro",
                "canteen", "diner", "кафе", "ресторан", "еда", "кухня", "кофе", "кофейня",
                "бар", "бистро", "столовая", "закусочная",
            ],
            Self::Shopping => &[
                "shopping", "shop", "store", "mall", "шоппинг", "магазин", "торговый",
            ],
            Self::Stores => &[
                "shop", "store", "shopping", "магазин", "торговый", "шоппинг",
            ],
            Self::Entertainment => &[
                "entertainment", "cinema", "club", "развлечения", "кино", "клуб",
            ],
            Self::Theatres => &[
                "theatre", "theater", "performance", "stage", "театр", "спектакль", "сцена",
            ],
            Self::Cinema => &[
                "cinema", "film", "movie", "кино", "фильм", "кинозал",
            ],
            Self::Any => &[],
        }
    }

    /// Look up a display label exactly as offered to visitors.
    ///
    /// # Examples
    /// ```
    /// use promenade_core::Interest;
    ///
    /// assert_eq!(Interest::from_display_label("Street art"), Some(Interest::StreetArt));
    /// assert_eq!(Interest::from_display_label("Street Art"), None);
    /// ```
    #[must_use]
    pub fn from_display_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|interest| interest.as_str() == label)
    }

    /// Look up a display label, ignoring surrounding whitespace and ASCII
    /// case.
    ///
    /// # Examples
    /// ```
    /// use promenade_core::Interest;
    ///
    /// assert_eq!(Interest::from_label(" Street Art "), Some(Interest::StreetArt));
    /// assert_eq!(Interest::from_label("Opera"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|interest| interest.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Interest {
    type Err = InterestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| InterestParseError {
            label: s.to_owned(),
        })
    }
}
