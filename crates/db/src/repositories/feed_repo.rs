//! Read-only aggregates behind the `/logs` endpoints.
//!
//! Each catalog item is paired with its latest log in a single
//! `LEFT JOIN LATERAL` query. "Latest" uses the same ordering as the
//! per-item log listings: log date descending, then id descending.

use folio_core::catalog::{LogKind, RECENT_FEED_LIMIT};
use sqlx::PgPool;

use crate::models::feed::FeedEntry;

/// Where one feed kind reads its items and logs from.
struct FeedSource {
    items: &'static str,
    title: &'static str,
    author: &'static str,
    logs: &'static str,
    parent_fk: &'static str,
    logged_on: &'static str,
    status: &'static str,
    filter: &'static str,
}

impl FeedSource {
    fn for_kind(kind: LogKind) -> Option<Self> {
        let source = match kind {
            LogKind::Music => return None,
            LogKind::Games => Self {
                items: "games",
                title: "i.title",
                author: "NULL::text",
                logs: "game_logs",
                parent_fk: "game_id",
                logged_on: "played_on",
                status: "l.status",
                filter: "",
            },
            LogKind::Movies => Self {
                items: "screens",
                title: "i.title",
                author: "NULL::text",
                logs: "screen_logs",
                parent_fk: "screen_id",
                logged_on: "watched_on",
                status: "l.status",
                filter: "WHERE i.kind = 'movie'",
            },
            LogKind::Series => Self {
                items: "screens",
                title: "i.title",
                author: "NULL::text",
                logs: "screen_logs",
                parent_fk: "screen_id",
                logged_on: "watched_on",
                status: "l.status",
                filter: "WHERE i.kind = 'series'",
            },
            LogKind::Books => Self {
                items: "reads",
                title: "i.title",
                author: "i.author",
                logs: "read_logs",
                parent_fk: "read_id",
                logged_on: "finished_on",
                status: "l.status",
                filter: "",
            },
            LogKind::Travels => Self {
                items: "travels",
                title: "i.destination",
                author: "NULL::text",
                logs: "travel_logs",
                parent_fk: "travel_id",
                logged_on: "visited_on",
                status: "NULL::text",
                filter: "",
            },
        };
        Some(source)
    }

    fn query(&self) -> String {
        let Self {
            items,
            title,
            author,
            logs,
            parent_fk,
            logged_on,
            status,
            filter,
        } = self;
        format!(
            "SELECT i.id, {title} AS title, $1::text AS kind, {author} AS author, \
                    l.rating::text AS rating, {status} AS status, \
                    COALESCE(l.created_at, i.created_at) AS date \
             FROM {items} i \
             LEFT JOIN LATERAL ( \
                 SELECT * FROM {logs} WHERE {parent_fk} = i.id \
                 ORDER BY {logged_on} DESC, id DESC LIMIT 1 \
             ) l ON TRUE \
             {filter} \
             ORDER BY i.created_at DESC, i.id DESC"
        )
    }
}

/// Builds the activity feeds.
pub struct LogFeedRepo;

impl LogFeedRepo {
    /// Every item of `kind` with its latest log. Playlists stand in for
    /// music and carry no rating.
    pub async fn feed(pool: &PgPool, kind: LogKind) -> Result<Vec<FeedEntry>, sqlx::Error> {
        let query = match FeedSource::for_kind(kind) {
            Some(source) => source.query(),
            None => "SELECT id, name AS title, $1::text AS kind, NULL::text AS author, \
                            NULL::text AS rating, NULL::text AS status, created_at AS date \
                     FROM playlists ORDER BY created_at DESC, id DESC"
                .to_string(),
        };
        sqlx::query_as::<_, FeedEntry>(&query)
            .bind(kind.as_str())
            .fetch_all(pool)
            .await
    }

    /// Of the most recently added games, those that have been logged, each
    /// with its latest rating and the time that log was written.
    pub async fn recent_games(pool: &PgPool) -> Result<Vec<FeedEntry>, sqlx::Error> {
        sqlx::query_as::<_, FeedEntry>(
            "SELECT g.id, g.title, $1::text AS kind, NULL::text AS author, \
                    l.rating::text AS rating, NULL::text AS status, l.created_at AS date \
             FROM ( \
                 SELECT id, title, created_at FROM games \
                 ORDER BY created_at DESC, id DESC LIMIT $2 \
             ) g \
             JOIN LATERAL ( \
                 SELECT rating, created_at FROM game_logs WHERE game_id = g.id \
                 ORDER BY played_on DESC, id DESC LIMIT 1 \
             ) l ON TRUE \
             ORDER BY g.created_at DESC, g.id DESC",
        )
        .bind(LogKind::Games.as_str())
        .bind(RECENT_FEED_LIMIT)
        .fetch_all(pool)
        .await
    }
}
