use crate::error::CoreError;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

/// A cataloging platform known to the service.
///
/// Each variant carries its canonical key (the field name used in records),
/// the aliases accepted from clients, and the base URL used to link to an
/// entry on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    AniDb,
    AniList,
    AnimeNewsNetwork,
    AnimePlanet,
    AniSearch,
    Annict,
    Imdb,
    Kaize,
    Kitsu,
    Kurozora,
    Letterboxd,
    LiveChart,
    MyAniLi,
    MyAnimeList,
    Nautiljon,
    Notify,
    OtakOtaku,
    Shikimori,
    Shoboi,
    SilverYasha,
    Simkl,
    TheMovieDb,
    Trakt,
}

static ALIAS_TABLE: LazyLock<HashMap<&'static str, Platform>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for platform in Platform::ALL {
        table.insert(platform.key(), platform);
        for alias in platform.aliases() {
            table.insert(*alias, platform);
        }
    }
    table
});

impl Platform {
    pub const ALL: [Platform; 23] = [
        Platform::AniDb,
        Platform::AniList,
        Platform::AnimeNewsNetwork,
        Platform::AnimePlanet,
        Platform::AniSearch,
        Platform::Annict,
        Platform::Imdb,
        Platform::Kaize,
        Platform::Kitsu,
        Platform::Kurozora,
        Platform::Letterboxd,
        Platform::LiveChart,
        Platform::MyAniLi,
        Platform::MyAnimeList,
        Platform::Nautiljon,
        Platform::Notify,
        Platform::OtakOtaku,
        Platform::Shikimori,
        Platform::Shoboi,
        Platform::SilverYasha,
        Platform::Simkl,
        Platform::TheMovieDb,
        Platform::Trakt,
    ];

    /// Returns the canonical lowercase key of the platform.
    pub const fn key(self) -> &'static str {
        match self {
            Platform::AniDb => "anidb",
            Platform::AniList => "anilist",
            Platform::AnimeNewsNetwork => "animenewsnetwork",
            Platform::AnimePlanet => "animeplanet",
            Platform::AniSearch => "anisearch",
            Platform::Annict => "annict",
            Platform::Imdb => "imdb",
            Platform::Kaize => "kaize",
            Platform::Kitsu => "kitsu",
            Platform::Kurozora => "kurozora",
            Platform::Letterboxd => "letterboxd",
            Platform::LiveChart => "livechart",
            Platform::MyAniLi => "myanili",
            Platform::MyAnimeList => "myanimelist",
            Platform::Nautiljon => "nautiljon",
            Platform::Notify => "notify",
            Platform::OtakOtaku => "otakotaku",
            Platform::Shikimori => "shikimori",
            Platform::Shoboi => "shoboi",
            Platform::SilverYasha => "silveryasha",
            Platform::Simkl => "simkl",
            Platform::TheMovieDb => "themoviedb",
            Platform::Trakt => "trakt",
        }
    }

    /// Returns the short codes and domain names accepted for this platform.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Platform::AniDb => &["ad", "adb", "anidb.net"],
            Platform::AniList => &["al", "anilist.co"],
            Platform::AnimeNewsNetwork => &["an", "ann", "animenewsnetwork.com"],
            Platform::AnimePlanet => &["ap", "anime-planet", "anime-planet.com", "animeplanet.com"],
            Platform::AniSearch => &[
                "as",
                "anisearch.de",
                "anisearch.es",
                "anisearch.fr",
                "anisearch.it",
                "anisearch.jp",
                "anisearch.com",
            ],
            Platform::Annict => &["ac", "act", "anc", "annict.com", "annict.jp", "en.annict.com"],
            Platform::Imdb => &["im", "imdb.com"],
            Platform::Kaize => &["kz", "kaize.io"],
            Platform::Kitsu => &["kt", "kts", "kitsu.app", "kitsu.io"],
            Platform::Kurozora => &["kr", "krz", "kurozora.app"],
            Platform::Letterboxd => &["lb", "letterboxd.com"],
            Platform::LiveChart => &["lc", "livechart.me"],
            Platform::MyAniLi => &["my", "myani.li"],
            Platform::MyAnimeList => &["ma", "mal", "myanimelist.net"],
            Platform::Nautiljon => &["nj", "ntj", "nautiljon.com"],
            Platform::Notify => &["nf", "ntf", "ntm", "notifymoe", "notify.moe"],
            Platform::OtakOtaku => &["oo", "otakotaku.com"],
            Platform::Shikimori => &[
                "sh",
                "shk",
                "shiki",
                "shikimori.me",
                "shikimori.one",
                "shikimori.org",
            ],
            Platform::Shoboi => &[
                "sb",
                "shb",
                "syb",
                "syoboi",
                "shobocal",
                "syobocal",
                "cal.syoboi.jp",
            ],
            Platform::SilverYasha => &["sy", "dbti", "db.silveryasha.id", "db.silveryasha.web.id"],
            Platform::Simkl => &[
                "sm",
                "smk",
                "simkl.com",
                "animecountdown",
                "animecountdown.com",
            ],
            Platform::TheMovieDb => &["tm", "tmdb", "tmdb.org"],
            Platform::Trakt => &["tr", "trk", "trakt.tv"],
        }
    }

    /// Returns the URL prefix an entry id is appended to.
    pub const fn route_base(self) -> &'static str {
        match self {
            Platform::AniDb => "https://anidb.net/anime/",
            Platform::AniList => "https://anilist.co/anime/",
            Platform::AnimeNewsNetwork => "https://animenewsnetwork/encyclopedia/anime?id=",
            Platform::AnimePlanet => "https://www.anime-planet.com/anime/",
            Platform::AniSearch => "https://www.anisearch.com/anime/",
            Platform::Annict => "https://annict.com/works/",
            Platform::Imdb => "https://www.imdb.com/title/",
            Platform::Kaize => "https://kaize.io/anime/",
            Platform::Kitsu => "https://kitsu.app/anime/",
            Platform::Kurozora => "https://kurozora.app/myanimelist.net/anime/",
            Platform::Letterboxd => "https://letterboxd.com/tmdb/",
            Platform::LiveChart => "https://www.livechart.me/anime/",
            Platform::MyAniLi => "https://myani.li/#/anime/details/",
            Platform::MyAnimeList => "https://myanimelist.net/anime/",
            Platform::Nautiljon => "https://www.nautiljon.com/animes/",
            Platform::Notify => "https://notify.moe/anime/",
            Platform::OtakOtaku => "https://otakotaku.com/anime/view/",
            Platform::Shikimori => "https://shikimori.one/animes/",
            Platform::Shoboi => "https://cal.syoboi.jp/tid/",
            Platform::SilverYasha => "https://db.silveryasha.id/anime/",
            Platform::Simkl => "https://simkl.com/anime/",
            Platform::TheMovieDb => "https://www.themoviedb.org/movie/",
            Platform::Trakt => "https://trakt.tv/",
        }
    }

    /// Platforms that can only be redirected to, never used as a source.
    pub const fn is_one_way(self) -> bool {
        matches!(
            self,
            Platform::Kurozora | Platform::MyAniLi | Platform::Letterboxd
        )
    }

    /// Looks up a platform by canonical key or alias, case-insensitively.
    pub fn from_alias(input: &str) -> Option<Self> {
        if let Some(platform) = ALIAS_TABLE.get(input) {
            return Some(*platform);
        }
        ALIAS_TABLE.get(input.to_ascii_lowercase().as_str()).copied()
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::from_alias(s).ok_or_else(|| CoreError::UnknownPlatform(s.to_string()))
    }
}

/// Resolves an alias to its canonical platform key.
///
/// Unknown input is returned lowercased; callers still have to validate it.
pub fn resolve(input: &str) -> Cow<'_, str> {
    match Platform::from_alias(input) {
        Some(platform) => Cow::Borrowed(platform.key()),
        None if input.bytes().any(|b| b.is_ascii_uppercase()) => {
            Cow::Owned(input.to_ascii_lowercase())
        }
        None => Cow::Borrowed(input),
    }
}

/// Returns `true` if `input` names a known platform after alias resolution.
pub fn is_valid_target(input: &str) -> bool {
    Platform::from_alias(input).is_some()
}

pub fn route_base(input: &str) -> Option<&'static str> {
    Platform::from_alias(input).map(Platform::route_base)
}
