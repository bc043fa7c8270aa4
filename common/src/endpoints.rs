//! REST path templates.
//!
//! Paths are relative to the page origin: the development host (or any
//! reverse proxy in front of the bundle) forwards `/api` and `/server` to the
//! upstream API.

pub const AUTH_PREFIX: &str = "/api";
pub const SERVER_PREFIX: &str = "/server";

/// Local-storage key of the access token.
pub const ACCESS_TOKEN_KEY: &str = "token";
/// Legacy local-storage flag cleared on logout.
pub const LEGACY_AUTH_KEY: &str = "auth";
/// Cookie holding the refresh token.
pub const REFRESH_COOKIE: &str = "refresh";

pub mod auth {
    pub fn login() -> String {
        format!("{}/auth/login", super::AUTH_PREFIX)
    }

    pub fn register() -> String {
        format!("{}/auth/register", super::AUTH_PREFIX)
    }

    pub fn refresh() -> String {
        format!("{}/auth/refresh", super::AUTH_PREFIX)
    }

    pub fn me() -> String {
        format!("{}/auth/me", super::AUTH_PREFIX)
    }
}

pub mod groups {
    use super::{AUTH_PREFIX, SERVER_PREFIX};

    pub fn list() -> String {
        format!("{AUTH_PREFIX}/groups/")
    }

    pub fn create() -> String {
        format!("{SERVER_PREFIX}/admin/groups")
    }

    pub fn item(id: i64) -> String {
        format!("{SERVER_PREFIX}/admin/groups/{id}")
    }

    pub fn archive(id: i64) -> String {
        format!("{SERVER_PREFIX}/admin/groups/{id}/archive")
    }

    pub fn unarchive(id: i64) -> String {
        format!("{SERVER_PREFIX}/admin/groups/{id}/unarchive")
    }

    pub fn students(id: i64) -> String {
        format!("{SERVER_PREFIX}/groups/{id}/students")
    }
}

pub mod users {
    use super::{AUTH_PREFIX, SERVER_PREFIX};

    pub fn pending() -> String {
        format!("{SERVER_PREFIX}/admin/users/pending")
    }

    pub fn approve(id: i64) -> String {
        format!("{AUTH_PREFIX}/admin/users/{id}/approve")
    }

    pub fn item(id: i64) -> String {
        format!("{AUTH_PREFIX}/admin/users/{id}")
    }
}

pub mod disciplines {
    use super::SERVER_PREFIX;

    pub fn list() -> String {
        format!("{SERVER_PREFIX}/disciplines")
    }

    pub fn item(id: i64) -> String {
        format!("{SERVER_PREFIX}/disciplines/{id}")
    }

    pub fn my_ids() -> String {
        format!("{SERVER_PREFIX}/disciplines/my-ids")
    }

    pub fn create() -> String {
        format!("{SERVER_PREFIX}/admin/disciplines")
    }

    pub fn admin_item(id: i64) -> String {
        format!("{SERVER_PREFIX}/admin/disciplines/{id}")
    }

    pub fn test(id: i64) -> String {
        format!("{SERVER_PREFIX}/disciplines/{id}/test")
    }

    pub fn materials(id: i64) -> String {
        format!("{SERVER_PREFIX}/disciplines/{id}/materials")
    }
}

pub mod labs {
    pub fn create() -> String {
        format!("{}/admin/labs", super::SERVER_PREFIX)
    }
}

pub mod tests {
    use super::SERVER_PREFIX;

    pub fn list() -> String {
        format!("{SERVER_PREFIX}/tests")
    }

    pub fn create() -> String {
        format!("{SERVER_PREFIX}/admin/tests")
    }

    pub fn admin_item(id: i64) -> String {
        format!("{SERVER_PREFIX}/admin/tests/{id}")
    }

    pub fn topics(id: i64) -> String {
        format!("{SERVER_PREFIX}/tests/{id}/topics")
    }

    pub fn replace_topics(id: i64) -> String {
        format!("{SERVER_PREFIX}/admin/tests/{id}/topics")
    }

    pub fn attempts(id: i64) -> String {
        format!("{SERVER_PREFIX}/tests/{id}/attempts")
    }
}

pub mod topics {
    use super::SERVER_PREFIX;

    pub fn list() -> String {
        format!("{SERVER_PREFIX}/admin/topics")
    }

    pub fn item(id: i64) -> String {
        format!("{SERVER_PREFIX}/admin/topics/{id}")
    }

    pub fn questions(id: i64) -> String {
        format!("{SERVER_PREFIX}/admin/topics/{id}/questions")
    }
}

pub mod questions {
    use super::SERVER_PREFIX;

    pub fn create() -> String {
        format!("{SERVER_PREFIX}/admin/questions")
    }

    pub fn item(id: i64) -> String {
        format!("{SERVER_PREFIX}/admin/questions/{id}")
    }
}

pub mod schedules {
    use super::SERVER_PREFIX;

    /// The calling student's schedule for a discipline's test.
    pub fn own(discipline_id: i64) -> String {
        format!("{SERVER_PREFIX}/disciplines/{discipline_id}/test/schedule")
    }

    pub fn for_discipline(discipline_id: i64) -> String {
        format!("{SERVER_PREFIX}/admin/disciplines/{discipline_id}/test/schedules")
    }

    pub fn item(id: i64) -> String {
        format!("{SERVER_PREFIX}/admin/test-schedules/{id}")
    }
}

pub mod attempts {
    use super::SERVER_PREFIX;

    pub fn item(id: i64) -> String {
        format!("{SERVER_PREFIX}/attempts/{id}")
    }

    pub fn questions(id: i64) -> String {
        format!("{SERVER_PREFIX}/attempts/{id}/questions")
    }

    pub fn answers(id: i64) -> String {
        format!("{SERVER_PREFIX}/attempts/{id}/answers")
    }

    pub fn finish(id: i64) -> String {
        format!("{SERVER_PREFIX}/attempts/{id}/finish")
    }
}

pub mod materials {
    use super::SERVER_PREFIX;

    pub fn admin_list() -> String {
        format!("{SERVER_PREFIX}/admin/materials")
    }

    pub fn seminarist_list() -> String {
        format!("{SERVER_PREFIX}/seminarist/materials")
    }

    pub fn admin_item(id: i64) -> String {
        format!("{SERVER_PREFIX}/admin/materials/{id}")
    }

    pub fn download(id: i64) -> String {
        format!("{SERVER_PREFIX}/materials/{id}/download")
    }
}

pub mod progress {
    use super::SERVER_PREFIX;

    pub fn own(discipline_id: i64) -> String {
        format!("{SERVER_PREFIX}/progress/{discipline_id}")
    }

    pub fn attendance(discipline_id: i64) -> String {
        format!("{SERVER_PREFIX}/progress/{discipline_id}/attendance")
    }
}

pub mod news {
    use super::SERVER_PREFIX;

    pub fn list() -> String {
        format!("{SERVER_PREFIX}/news")
    }

    pub fn item(id: i64) -> String {
        format!("{SERVER_PREFIX}/news/{id}")
    }
}

#[cfg(test)]
mod path_tests {
    #[test]
    fn templates() {
        assert_eq!(super::disciplines::item(7), "/server/disciplines/7");
        assert_eq!(super::attempts::answers(12), "/server/attempts/12/answers");
        assert_eq!(super::tests::replace_topics(3), "/server/admin/tests/3/topics");
        assert_eq!(super::auth::login(), "/api/auth/login");
        assert_eq!(super::groups::list(), "/api/groups/");
        assert_eq!(super::schedules::own(4), "/server/disciplines/4/test/schedule");
    }
}
