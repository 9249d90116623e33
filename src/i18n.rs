//! UI Messages
//!
//! Notification texts in the languages selectable from the settings panel.

use crate::models::FilterType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    /// Unknown or empty codes fall back to Chinese
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_ascii_lowercase();
        if code == "en" || code.starts_with("en-") || code.starts_with("en_") {
            Locale::En
        } else {
            Locale::Zh
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    pub const ALL: [Locale; 2] = [Locale::Zh, Locale::En];

    pub fn display_name(self) -> &'static str {
        match self {
            Locale::Zh => "中文",
            Locale::En => "English",
        }
    }
}

/// Everything the stores can tell the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LoadSucceeded,
    LoadFailed(String),
    AddSucceeded,
    AddFailed(String),
    ToggleFailed(String),
    DeleteSucceeded,
    DeleteFailed(String),
    NothingToClear,
    ClearSucceeded(usize),
    ClearFailed(String),
    ConfigLoadFailed(String),
    ConfigSaved,
    ConfigSaveFailed(String),
}

impl Message {
    pub fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::Zh => match self {
                Message::LoadSucceeded => "加载成功".to_string(),
                Message::LoadFailed(e) => format!("加载失败: {}", e),
                Message::AddSucceeded => "添加成功".to_string(),
                Message::AddFailed(e) => format!("添加失败: {}", e),
                Message::ToggleFailed(e) => format!("操作失败: {}", e),
                Message::DeleteSucceeded => "删除成功".to_string(),
                Message::DeleteFailed(e) => format!("删除失败: {}", e),
                Message::NothingToClear => "没有已完成的待办事项".to_string(),
                Message::ClearSucceeded(n) => format!("已清除 {} 个已完成事项", n),
                Message::ClearFailed(e) => format!("清除失败: {}", e),
                Message::ConfigLoadFailed(e) => format!("加载配置失败: {}", e),
                Message::ConfigSaved => "配置已保存".to_string(),
                Message::ConfigSaveFailed(e) => format!("保存失败: {}", e),
            },
            Locale::En => match self {
                Message::LoadSucceeded => "Todos loaded".to_string(),
                Message::LoadFailed(e) => format!("Failed to load todos: {}", e),
                Message::AddSucceeded => "Todo added".to_string(),
                Message::AddFailed(e) => format!("Failed to add todo: {}", e),
                Message::ToggleFailed(e) => format!("Failed to update todo: {}", e),
                Message::DeleteSucceeded => "Todo deleted".to_string(),
                Message::DeleteFailed(e) => format!("Failed to delete todo: {}", e),
                Message::NothingToClear => "No completed todos to clear".to_string(),
                Message::ClearSucceeded(1) => "Cleared 1 completed todo".to_string(),
                Message::ClearSucceeded(n) => format!("Cleared {} completed todos", n),
                Message::ClearFailed(e) => format!("Failed to clear completed todos: {}", e),
                Message::ConfigLoadFailed(e) => format!("Failed to load settings: {}", e),
                Message::ConfigSaved => "Settings saved".to_string(),
                Message::ConfigSaveFailed(e) => format!("Failed to save settings: {}", e),
            },
        }
    }
}

/// Static labels used by the views
pub fn filter_label(filter: FilterType, locale: Locale) -> &'static str {
    match (locale, filter) {
        (Locale::Zh, FilterType::All) => "全部",
        (Locale::Zh, FilterType::Active) => "未完成",
        (Locale::Zh, FilterType::Completed) => "已完成",
        (Locale::En, FilterType::All) => "All",
        (Locale::En, FilterType::Active) => "Active",
        (Locale::En, FilterType::Completed) => "Completed",
    }
}

pub fn items_left(active: usize, locale: Locale) -> String {
    match locale {
        Locale::Zh => format!("{} 个待办事项", active),
        Locale::En if active == 1 => "1 item left".to_string(),
        Locale::En => format!("{} items left", active),
    }
}

/// Short UI strings keyed by purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Title,
    InputPlaceholder,
    Add,
    Delete,
    ClearCompleted,
    Loading,
    Empty,
    Settings,
    ApiKey,
    Language,
    LlmBaseUrl,
    LlmModel,
    Save,
    Saving,
    Cancel,
}

pub fn label(label: Label, locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => match label {
            Label::Title => "待办事项",
            Label::InputPlaceholder => "需要做什么?",
            Label::Add => "添加",
            Label::Delete => "删除",
            Label::ClearCompleted => "清除已完成",
            Label::Loading => "加载中...",
            Label::Empty => "暂无待办事项",
            Label::Settings => "设置",
            Label::ApiKey => "API 密钥",
            Label::Language => "界面语言",
            Label::LlmBaseUrl => "LLM 接口地址",
            Label::LlmModel => "LLM 模型",
            Label::Save => "保存",
            Label::Saving => "保存中...",
            Label::Cancel => "取消",
        },
        Locale::En => match label {
            Label::Title => "Todos",
            Label::InputPlaceholder => "What needs to be done?",
            Label::Add => "Add",
            Label::Delete => "Delete",
            Label::ClearCompleted => "Clear completed",
            Label::Loading => "Loading...",
            Label::Empty => "Nothing to do",
            Label::Settings => "Settings",
            Label::ApiKey => "API key",
            Label::Language => "Language",
            Label::LlmBaseUrl => "LLM base URL",
            Label::LlmModel => "LLM model",
            Label::Save => "Save",
            Label::Saving => "Saving...",
            Label::Cancel => "Cancel",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_code() {
        assert_eq!(Locale::from_code("en"), Locale::En);
        assert_eq!(Locale::from_code(" EN-us "), Locale::En);
        assert_eq!(Locale::from_code("zh"), Locale::Zh);
        assert_eq!(Locale::from_code("fr"), Locale::Zh);
        assert_eq!(Locale::from_code(""), Locale::Zh);
    }

    #[test]
    fn test_failure_messages_keep_reason() {
        let msg = Message::LoadFailed("disk error".to_string());
        assert!(msg.render(Locale::Zh).contains("disk error"));
        assert!(msg.render(Locale::En).contains("disk error"));
    }

    #[test]
    fn test_clear_count_rendering() {
        assert_eq!(Message::ClearSucceeded(3).render(Locale::Zh), "已清除 3 个已完成事项");
        assert_eq!(Message::ClearSucceeded(1).render(Locale::En), "Cleared 1 completed todo");
        assert_eq!(items_left(2, Locale::En), "2 items left");
    }
}
