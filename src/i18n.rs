//! Localized UI text.
//!
//! Every string the UI renders comes from a static [`Strings`] table selected
//! by [`Language`]. Callers always pass the language explicitly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "russian")]
    Ru,
    #[serde(alias = "english")]
    En,
    #[serde(alias = "ukrainian")]
    Uk,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ru, Language::En, Language::Uk];

    /// Cycle `Ru -> En -> Uk -> Ru`.
    pub fn next(self) -> Self {
        match self {
            Language::Ru => Language::En,
            Language::En => Language::Uk,
            Language::Uk => Language::Ru,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::Uk => "uk",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Ru => "Русский",
            Language::En => "English",
            Language::Uk => "Українська",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::Ru => &RU,
            Language::En => &EN,
            Language::Uk => &UK,
        }
    }
}

pub struct Strings {
    pub playlist: &'static str,
    pub audio_player: &'static str,
    pub no_audio_files: &'static str,
    pub click_upload: &'static str,
    pub select_track: &'static str,
    pub mouse_controls: &'static str,
    pub left_click: &'static str,
    pub right_click: &'static str,
    pub middle_click: &'static str,
    pub mouse_wheel: &'static str,
    pub upload_files: &'static str,
    pub auto_play: &'static str,
    pub language: &'static str,
    pub settings: &'static str,
    pub could_not_load_audio: &'static str,
    pub playback_error: &'static str,
    pub file_selection_error: &'static str,
    pub clear_playlist: &'static str,
    pub remove_track: &'static str,
    pub upload_tooltip: &'static str,
    pub about: &'static str,
    pub about_title: &'static str,
    pub about_description: &'static str,
    pub version: &'static str,
    pub close: &'static str,
    pub loading: &'static str,
    pub playing: &'static str,
    pub paused: &'static str,
    pub stopped: &'static str,
    pub volume: &'static str,
    pub on: &'static str,
    pub off: &'static str,
    pub import_prompt: &'static str,
}

static RU: Strings = Strings {
    playlist: "Плейлист",
    audio_player: "Аудиоплеер",
    no_audio_files: "Нет аудиофайлов",
    click_upload: "Нажмите [o], чтобы загрузить файлы",
    select_track: "Выберите трек",
    mouse_controls: "Управление мышью:",
    left_click: "ЛКМ - повтор текущего трека",
    right_click: "ПКМ - следующий трек",
    middle_click: "СКМ - предыдущий трек",
    mouse_wheel: "Колесико мыши - изменение громкости",
    upload_files: "Загрузите свои аудиофайлы через [o] в плейлисте",
    auto_play: "Автопроигрывание",
    language: "Язык",
    settings: "Настройки",
    could_not_load_audio: "Не удалось загрузить аудиофайл",
    playback_error: "Ошибка воспроизведения",
    file_selection_error: "Ошибка при загрузке файлов",
    clear_playlist: "Очистить плейлист",
    remove_track: "Удалить трек",
    upload_tooltip: "Загрузить файлы",
    about: "О программе",
    about_title: "Аудиоплеер",
    about_description: "Терминальный аудиоплеер. Поддерживает различные аудиоформаты и имеет удобный интерфейс для управления плейлистами.",
    version: "Версия",
    close: "Закрыть",
    loading: "Загрузка...",
    playing: "Воспроизведение",
    paused: "Пауза",
    stopped: "Остановлено",
    volume: "Громкость",
    on: "вкл",
    off: "выкл",
    import_prompt: "Путь к файлу или папке (Enter - загрузить, Esc - отмена)",
};

static EN: Strings = Strings {
    playlist: "Playlist",
    audio_player: "Audio Player",
    no_audio_files: "No audio files",
    click_upload: "Press [o] to upload files",
    select_track: "Select track",
    mouse_controls: "Mouse controls:",
    left_click: "LMB - repeat current track",
    right_click: "RMB - next track",
    middle_click: "MMB - previous track",
    mouse_wheel: "Mouse wheel - volume control",
    upload_files: "Upload your audio files using [o] in the playlist",
    auto_play: "Auto-play",
    language: "Language",
    settings: "Settings",
    could_not_load_audio: "Could not load audio file",
    playback_error: "Playback error",
    file_selection_error: "Error loading files",
    clear_playlist: "Clear playlist",
    remove_track: "Remove track",
    upload_tooltip: "Upload files",
    about: "About",
    about_title: "Audio Player",
    about_description: "Terminal audio player. Supports various audio formats and features a convenient interface for playlist management.",
    version: "Version",
    close: "Close",
    loading: "Loading...",
    playing: "Playing",
    paused: "Paused",
    stopped: "Stopped",
    volume: "Volume",
    on: "on",
    off: "off",
    import_prompt: "Path to a file or folder (Enter - upload, Esc - cancel)",
};

static UK: Strings = Strings {
    playlist: "Плейлист",
    audio_player: "Аудіоплеєр",
    no_audio_files: "Немає аудіофайлів",
    click_upload: "Натисніть [o], щоб завантажити файли",
    select_track: "Оберіть трек",
    mouse_controls: "Керування мишею:",
    left_click: "ЛКМ - повтор поточного треку",
    right_click: "ПКМ - наступний трек",
    middle_click: "СКМ - попередній трек",
    mouse_wheel: "Колесо миші - зміна гучності",
    upload_files: "Завантажте свої аудіофайли через [o] у плейлисті",
    auto_play: "Автопрогравання",
    language: "Мова",
    settings: "Налаштування",
    could_not_load_audio: "Не вдалося завантажити аудіофайл",
    playback_error: "Помилка відтворення",
    file_selection_error: "Помилка при завантаженні файлів",
    clear_playlist: "Очистити плейлист",
    remove_track: "Видалити трек",
    upload_tooltip: "Завантажити файли",
    about: "Про програму",
    about_title: "Аудіоплеєр",
    about_description: "Термінальний аудіоплеєр. Підтримує різні аудіоформати та має зручний інтерфейс для керування плейлистами.",
    version: "Версія",
    close: "Закрити",
    loading: "Завантаження...",
    playing: "Відтворення",
    paused: "Пауза",
    stopped: "Зупинено",
    volume: "Гучність",
    on: "увімк",
    off: "вимк",
    import_prompt: "Шлях до файлу або папки (Enter - завантажити, Esc - скасувати)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_every_language() {
        let mut lang = Language::Ru;
        for expected in [Language::En, Language::Uk, Language::Ru] {
            lang = lang.next();
            assert_eq!(lang, expected);
        }
    }

    #[test]
    fn each_language_has_its_own_table() {
        assert_eq!(Language::En.strings().playlist, "Playlist");
        assert_eq!(Language::Ru.strings().audio_player, "Аудиоплеер");
        assert_eq!(Language::Uk.strings().audio_player, "Аудіоплеєр");
        for lang in Language::ALL {
            assert!(!lang.strings().could_not_load_audio.is_empty());
            assert!(!lang.strings().playback_error.is_empty());
        }
    }

    #[test]
    fn language_accepts_codes_and_full_names() {
        #[derive(Deserialize)]
        struct Ui {
            language: Language,
        }

        let ui: Ui = toml::from_str("language = \"uk\"").unwrap();
        assert_eq!(ui.language, Language::Uk);
        let ui: Ui = toml::from_str("language = \"english\"").unwrap();
        assert_eq!(ui.language, Language::En);
        assert!(toml::from_str::<Ui>("language = \"de\"").is_err());
    }
}
