//! Coercion of raw listing parameters into a typed [`GameQuery`].
//!
//! Every parameter is optional and arrives as a string. Values that cannot be
//! coerced are dropped (the filter is not applied, or the default is used) and a
//! debug event is emitted; a malformed parameter never fails the request.
//!
//! A number that parses but can never be a genre id still filters, and matches
//! no game.

/// Page used when `page` is absent or unusable.
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when `pageSize` is absent or unusable.
pub const DEFAULT_PAGE_SIZE: u64 = 20;
/// Largest page size a client can ask for.
pub const MAX_PAGE_SIZE: u64 = 100;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Raw query string parameters of `GET /games`, exactly as the client sent them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GameListParams {
    pub genres: Option<String>,
    pub available: Option<String>,
    pub search: Option<String>,
    pub min_players: Option<String>,
    pub max_players: Option<String>,
    pub play_time_min: Option<String>,
    pub play_time_max: Option<String>,
    pub year_min: Option<String>,
    pub year_max: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// First occurrence of a key wins; unknown keys are ignored.
impl FromIterator<(String, String)> for GameListParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "genres" => &mut params.genres,
                "available" => &mut params.available,
                "search" => &mut params.search,
                "minPlayers" => &mut params.min_players,
                "maxPlayers" => &mut params.max_players,
                "playTimeMin" => &mut params.play_time_min,
                "playTimeMax" => &mut params.play_time_max,
                "yearMin" => &mut params.year_min,
                "yearMax" => &mut params.year_max,
                "ordering" => &mut params.ordering,
                "page" => &mut params.page,
                "pageSize" => &mut params.page_size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Inclusive numeric range; either side may be open.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Column a listing can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    BggRating,
    DifficultyRating,
    PlayTime,
    /// `year_published`, compared as an integer.
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: Direction,
}

impl SortOrder {
    /// Highest rated first.
    pub const DEFAULT: Self = Self {
        key: SortKey::BggRating,
        direction: Direction::Desc,
    };

    /// Look an `ordering` value up in the allowlist. A leading `-` means descending.
    ///
    /// Keys are case-sensitive; anything outside the allowlist yields `None`.
    #[must_use]
    pub fn from_key(value: &str) -> Option<Self> {
        let (direction, name) = match value.strip_prefix('-') {
            Some(rest) => (Direction::Desc, rest),
            None => (Direction::Asc, value),
        };
        let key = match name {
            "name" => SortKey::Name,
            "bggRating" => SortKey::BggRating,
            "difficultyRating" => SortKey::DifficultyRating,
            "playTime" => SortKey::PlayTime,
            "year" => SortKey::Year,
            _ => return None,
        };
        Some(Self { key, direction })
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Genre a listing is restricted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenreFilter {
    Id(i32),
    /// A finite value no genre id can equal: fractional or outside the `i32` range.
    Unmatchable(f64),
}

/// Typed filter, ordering and pagination descriptor for one listing request.
#[derive(Debug, Clone, PartialEq)]
pub struct GameQuery {
    pub genre: Option<GenreFilter>,
    pub available: Option<bool>,
    /// Trimmed, never empty.
    pub search: Option<String>,
    pub players: Bounds,
    pub play_time: Bounds,
    pub year: Bounds,
    pub ordering: SortOrder,
    /// 1-based.
    pub page: u64,
    /// Within `1..=MAX_PAGE_SIZE`.
    pub page_size: u64,
}

impl Default for GameQuery {
    fn default() -> Self {
        Self {
            genre: None,
            available: None,
            search: None,
            players: Bounds::default(),
            play_time: Bounds::default(),
            year: Bounds::default(),
            ordering: SortOrder::DEFAULT,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl GameQuery {
    /// Coerce raw parameters, falling back to "no filter" or the default for anything unusable.
    #[must_use]
    pub fn from_params(params: &GameListParams) -> Self {
        let search = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let ordering = match params.ordering.as_deref() {
            None => SortOrder::DEFAULT,
            Some(raw) => SortOrder::from_key(raw).unwrap_or_else(|| {
                ignored("ordering", raw);
                SortOrder::DEFAULT
            }),
        };

        Self {
            genre: genre(params.genres.as_deref()),
            available: flag("available", params.available.as_deref()),
            search,
            players: Bounds {
                min: number("minPlayers", params.min_players.as_deref()),
                max: number("maxPlayers", params.max_players.as_deref()),
            },
            play_time: Bounds {
                min: number("playTimeMin", params.play_time_min.as_deref()),
                max: number("playTimeMax", params.play_time_max.as_deref()),
            },
            year: Bounds {
                min: number("yearMin", params.year_min.as_deref()),
                max: number("yearMax", params.year_max.as_deref()),
            },
            ordering,
            page: page(params.page.as_deref()),
            page_size: page_size(params.page_size.as_deref()),
        }
    }

    /// Rows skipped before this page starts.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(MAX_OFFSET)
    }
}

fn ignored(param: &'static str, value: &str) {
    tracing::debug!(param, value, "ignoring malformed query parameter");
}

/// Finite number, or `None`. A blank value reads as zero.
fn number(param: &'static str, raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => {
            ignored(param, trimmed);
            None
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn genre(raw: Option<&str>) -> Option<GenreFilter> {
    let n = number("genres", raw)?;
    if n.fract() == 0.0 && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&n) {
        Some(GenreFilter::Id(n as i32))
    } else {
        Some(GenreFilter::Unmatchable(n))
    }
}

fn flag(param: &'static str, raw: Option<&str>) -> Option<bool> {
    let raw = raw?;
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" => Some(true),
        "0" | "false" | "f" | "no" | "n" => Some(false),
        _ => {
            ignored(param, raw);
            None
        }
    }
}

/// Paging parameters keep their default when blank.
fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn page(raw: Option<&str>) -> u64 {
    number("page", non_blank(raw)).map_or(DEFAULT_PAGE, |n| n.floor().max(1.0) as u64)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn page_size(raw: Option<&str>) -> u64 {
    number("pageSize", non_blank(raw)).map_or(DEFAULT_PAGE_SIZE, |n| {
        n.floor().clamp(1.0, MAX_PAGE_SIZE as f64) as u64
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> GameListParams {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn query(pairs: &[(&str, &str)]) -> GameQuery {
        GameQuery::from_params(&params(pairs))
    }

    #[test]
    fn test_no_parameters_yields_defaults() {
        assert_eq!(query(&[]), GameQuery::default());
        assert_eq!(query(&[]).offset(), 0);
    }

    #[test]
    fn test_first_occurrence_wins_and_unknown_keys_ignored() {
        let p = params(&[("page", "3"), ("page", "7"), ("limit", "5")]);
        assert_eq!(p.page.as_deref(), Some("3"));
        assert_eq!(p.page_size, None);
    }

    #[test]
    fn test_numeric_filters() {
        let q = query(&[
            ("minPlayers", "2"),
            ("maxPlayers", " 6 "),
            ("playTimeMin", "30.5"),
            ("playTimeMax", "1e2"),
            ("yearMin", "1990"),
            ("yearMax", "2020"),
        ]);
        assert_eq!(q.players, Bounds { min: Some(2.0), max: Some(6.0) });
        assert_eq!(q.play_time, Bounds { min: Some(30.5), max: Some(100.0) });
        assert_eq!(q.year, Bounds { min: Some(1990.0), max: Some(2020.0) });
    }

    #[test]
    fn test_malformed_numbers_are_dropped() {
        let q = query(&[
            ("minPlayers", "abc"),
            ("maxPlayers", "1,5"),
            ("playTimeMin", "Infinity"),
            ("playTimeMax", "NaN"),
            ("yearMin", "19x0"),
        ]);
        assert_eq!(q.players, Bounds::default());
        assert_eq!(q.play_time, Bounds::default());
        assert_eq!(q.year, Bounds::default());
    }

    #[test]
    fn test_blank_numbers_read_as_zero() {
        let q = query(&[("minPlayers", ""), ("yearMax", "  "), ("genres", "")]);
        assert_eq!(q.players, Bounds { min: Some(0.0), max: None });
        assert_eq!(q.year, Bounds { min: None, max: Some(0.0) });
        assert_eq!(q.genre, Some(GenreFilter::Id(0)));
    }

    #[test]
    fn test_genre_filter() {
        assert_eq!(query(&[("genres", "4")]).genre, Some(GenreFilter::Id(4)));
        assert_eq!(query(&[("genres", " 12 ")]).genre, Some(GenreFilter::Id(12)));
        assert_eq!(query(&[("genres", "3.0")]).genre, Some(GenreFilter::Id(3)));
        assert_eq!(query(&[("genres", "action")]).genre, None);
        assert_eq!(query(&[("genres", "-Infinity")]).genre, None);
        assert_eq!(
            query(&[("genres", "2.5")]).genre,
            Some(GenreFilter::Unmatchable(2.5))
        );
        assert_eq!(
            query(&[("genres", "1e12")]).genre,
            Some(GenreFilter::Unmatchable(1e12))
        );
    }

    #[test]
    fn test_available_tokens() {
        for token in ["1", "true", "t", "yes", "y", "TRUE", " Yes "] {
            assert_eq!(query(&[("available", token)]).available, Some(true), "{token}");
        }
        for token in ["0", "false", "f", "no", "n", "No"] {
            assert_eq!(query(&[("available", token)]).available, Some(false), "{token}");
        }
        for token in ["maybe", "", "2", "on"] {
            assert_eq!(query(&[("available", token)]).available, None, "{token}");
        }
    }

    #[test]
    fn test_search_is_trimmed() {
        assert_eq!(
            query(&[("search", "  catan ")]).search.as_deref(),
            Some("catan")
        );
        assert_eq!(query(&[("search", "   ")]).search, None);
    }

    #[test]
    fn test_ordering_allowlist() {
        let cases = [
            ("name", SortKey::Name, Direction::Asc),
            ("-name", SortKey::Name, Direction::Desc),
            ("bggRating", SortKey::BggRating, Direction::Asc),
            ("-bggRating", SortKey::BggRating, Direction::Desc),
            ("difficultyRating", SortKey::DifficultyRating, Direction::Asc),
            ("-difficultyRating", SortKey::DifficultyRating, Direction::Desc),
            ("playTime", SortKey::PlayTime, Direction::Asc),
            ("-playTime", SortKey::PlayTime, Direction::Desc),
            ("year", SortKey::Year, Direction::Asc),
            ("-year", SortKey::Year, Direction::Desc),
        ];
        for (raw, key, direction) in cases {
            assert_eq!(
                query(&[("ordering", raw)]).ordering,
                SortOrder { key, direction },
                "{raw}"
            );
        }
    }

    #[test]
    fn test_unknown_ordering_falls_back_to_default() {
        for raw in ["bogus", "NAME", "--name", "-", "", "name "] {
            assert_eq!(query(&[("ordering", raw)]).ordering, SortOrder::DEFAULT, "{raw}");
        }
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(query(&[("page", "0")]).page, 1);
        assert_eq!(query(&[("page", "-4")]).page, 1);
        assert_eq!(query(&[("page", "2.9")]).page, 2);
        assert_eq!(query(&[("page", "x")]).page, 1);
        assert_eq!(query(&[("page", "3")]).page, 3);
        assert_eq!(query(&[("page", "")]).page, 1);
    }

    #[test]
    fn test_page_size_bounds() {
        assert_eq!(query(&[("pageSize", "500")]).page_size, 100);
        assert_eq!(query(&[("pageSize", "0")]).page_size, 1);
        assert_eq!(query(&[("pageSize", "-3")]).page_size, 1);
        assert_eq!(query(&[("pageSize", "abc")]).page_size, 20);
        assert_eq!(query(&[("pageSize", "15")]).page_size, 15);
        assert_eq!(query(&[("pageSize", " ")]).page_size, 20);
    }

    #[test]
    fn test_offset() {
        assert_eq!(query(&[("page", "1"), ("pageSize", "20")]).offset(), 0);
        assert_eq!(query(&[("page", "2"), ("pageSize", "20")]).offset(), 20);
        assert_eq!(query(&[("page", "4"), ("pageSize", "7")]).offset(), 21);
        assert_eq!(query(&[("page", "1e300"), ("pageSize", "100")]).offset(), MAX_OFFSET);
    }
}
