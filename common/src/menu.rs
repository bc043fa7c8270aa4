use crate::model::user::Role;

/// Screens of the application. Only the role menu and the app shell navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Registration,
    Menu,
    News,
    Disciplines,
    Tests,
    Questions,
    Groups,
    Students,
    Materials,
    Gradebook,
    MyTests,
    MyGrades,
    Attempt(i64),
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Вход",
            Page::Registration => "Регистрация",
            Page::Menu => "Меню",
            Page::News => "Новости",
            Page::Disciplines => "Дисциплины",
            Page::Tests => "Тесты",
            Page::Questions => "Вопросы",
            Page::Groups => "Группы",
            Page::Students => "Студенты",
            Page::Materials => "Лекции",
            Page::Gradebook => "Ведомость",
            Page::MyTests => "Мои тесты",
            Page::MyGrades => "Мои оценки",
            Page::Attempt(_) => "Прохождение теста",
        }
    }

    /// Pages reachable without signing in.
    pub fn is_public(&self) -> bool {
        matches!(self, Page::Login | Page::Registration)
    }
}

pub fn menu_for_role(role: Role) -> Vec<Page> {
    match role {
        Role::Admin => vec![
            Page::News,
            Page::Disciplines,
            Page::Tests,
            Page::Questions,
            Page::Groups,
            Page::Students,
            Page::Materials,
            Page::Gradebook,
        ],
        Role::Seminarist => vec![
            Page::News,
            Page::Disciplines,
            Page::Students,
            Page::Materials,
            Page::Gradebook,
        ],
        Role::Student => vec![Page::News, Page::MyTests, Page::MyGrades, Page::Materials],
        Role::Unrecognized => Vec::new(),
    }
}

/// Menu for a raw role id as the profile reports it.
pub fn menu_for(role_id: &str) -> Vec<Page> {
    menu_for_role(Role::from_role_id(role_id))
}

/// Whether `role` may open `page`; the attempt screen is student-only.
pub fn allows(role: Role, page: Page) -> bool {
    match page {
        Page::Login | Page::Registration | Page::Menu => true,
        Page::Attempt(_) => role == Role::Student,
        other => menu_for_role(role).contains(&other),
    }
}
