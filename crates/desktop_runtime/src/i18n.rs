//! Static translation tables for application titles and shell chrome.

use platform_host::LocalClock;

use crate::model::{AppId, Locale};

/// Shell chrome strings for one locale.
#[derive(Debug)]
pub struct ShellStrings {
    pub setup_welcome_title: &'static str,
    pub setup_welcome_body: &'static str,
    pub setup_name_title: &'static str,
    pub setup_name_placeholder: &'static str,
    pub setup_next: &'static str,
    pub setup_loading: [&'static str; 4],
    pub lock_hint: &'static str,
    pub lock_password_placeholder: &'static str,
    pub lock_button: &'static str,
    pub lock: &'static str,
    pub activities: &'static str,
    pub wifi: &'static str,
    pub bluetooth: &'static str,
    pub brightness: &'static str,
    pub volume: &'static str,
    pub mobile_mode: &'static str,
    pub desktop_mode: &'static str,
    pub home: &'static str,
    pub no_notifications: &'static str,
    pub assistant_title: &'static str,
    pub assistant_placeholder: &'static str,
    pub assistant_greeting: &'static str,
    pub assistant_thinking: &'static str,
    pub appearance: &'static str,
    pub dark_mode: &'static str,
    pub light_mode: &'static str,
    pub language: &'static str,
    pub wallpapers: &'static str,
    pub term_welcome: &'static str,
    pub term_help: &'static str,
    pub term_processing: &'static str,
    pub term_not_found: &'static str,
    pub term_ask_usage: &'static str,
    pub placeholder_body: &'static str,
}

static AR: ShellStrings = ShellStrings {
    setup_welcome_title: "مرحباً بك في HamzaOS",
    setup_welcome_body: "لنقم بإعداد جهازك في بضع خطوات.",
    setup_name_title: "ما اسمك؟",
    setup_name_placeholder: "اكتب اسمك",
    setup_next: "التالي",
    setup_loading: [
        "مرحباً",
        "نجهز كل شيء من أجلك",
        "قد يستغرق هذا بضع ثوانٍ",
        "اقتربنا...",
    ],
    lock_hint: "اضغط Enter لفتح القفل",
    lock_password_placeholder: "كلمة المرور",
    lock_button: "فتح",
    lock: "قفل",
    activities: "الأنشطة",
    wifi: "واي فاي",
    bluetooth: "بلوتوث",
    brightness: "السطوع",
    volume: "الصوت",
    mobile_mode: "وضع الهاتف",
    desktop_mode: "وضع سطح المكتب",
    home: "الرئيسية",
    no_notifications: "لا توجد إشعارات جديدة",
    assistant_title: "المساعد",
    assistant_placeholder: "اسألني أي شيء...",
    assistant_greeting: "مرحباً! أنا مساعد حمزة. كيف يمكنني مساعدتك؟",
    assistant_thinking: "يفكر...",
    appearance: "المظهر",
    dark_mode: "الوضع الداكن",
    light_mode: "الوضع الفاتح",
    language: "اللغة",
    wallpapers: "الخلفيات",
    term_welcome: "مرحباً بك في الطرفية. اكتب help لعرض الأوامر.",
    term_help: "الأوامر المتاحة:",
    term_processing: "جارٍ المعالجة...",
    term_not_found: "الأمر غير موجود",
    term_ask_usage: "الاستخدام: ask <سؤالك>",
    placeholder_body: "هذا التطبيق عرض توضيحي.",
};

static EN: ShellStrings = ShellStrings {
    setup_welcome_title: "Welcome to HamzaOS",
    setup_welcome_body: "Let's get your device set up in a few steps.",
    setup_name_title: "What's your name?",
    setup_name_placeholder: "Enter your name",
    setup_next: "Next",
    setup_loading: [
        "Hi there",
        "We're getting things ready for you",
        "This might take a few seconds",
        "Almost there...",
    ],
    lock_hint: "Press Enter to unlock",
    lock_password_placeholder: "Password",
    lock_button: "Unlock",
    lock: "Lock",
    activities: "Activities",
    wifi: "Wi-Fi",
    bluetooth: "Bluetooth",
    brightness: "Brightness",
    volume: "Volume",
    mobile_mode: "Phone mode",
    desktop_mode: "Desktop mode",
    home: "Home",
    no_notifications: "No new notifications",
    assistant_title: "Assistant",
    assistant_placeholder: "Ask me anything...",
    assistant_greeting: "Hi! I'm Hamza's assistant. How can I help?",
    assistant_thinking: "Thinking...",
    appearance: "Appearance",
    dark_mode: "Dark mode",
    light_mode: "Light mode",
    language: "Language",
    wallpapers: "Wallpapers",
    term_welcome: "Welcome to the terminal. Type help to list commands.",
    term_help: "Available commands:",
    term_processing: "Processing...",
    term_not_found: "command not found",
    term_ask_usage: "usage: ask <question>",
    placeholder_body: "This application is a demo.",
};

static ZH: ShellStrings = ShellStrings {
    setup_welcome_title: "欢迎使用 HamzaOS",
    setup_welcome_body: "只需几步即可完成设置。",
    setup_name_title: "你叫什么名字？",
    setup_name_placeholder: "输入你的名字",
    setup_next: "下一步",
    setup_loading: ["你好", "我们正在为你做准备", "这可能需要几秒钟", "快好了..."],
    lock_hint: "按 Enter 解锁",
    lock_password_placeholder: "密码",
    lock_button: "解锁",
    lock: "锁定",
    activities: "活动",
    wifi: "无线网络",
    bluetooth: "蓝牙",
    brightness: "亮度",
    volume: "音量",
    mobile_mode: "手机模式",
    desktop_mode: "桌面模式",
    home: "主页",
    no_notifications: "没有新通知",
    assistant_title: "助手",
    assistant_placeholder: "问我任何问题...",
    assistant_greeting: "你好！我是 Hamza 的助手。有什么可以帮你？",
    assistant_thinking: "思考中...",
    appearance: "外观",
    dark_mode: "深色模式",
    light_mode: "浅色模式",
    language: "语言",
    wallpapers: "壁纸",
    term_welcome: "欢迎使用终端。输入 help 查看命令。",
    term_help: "可用命令：",
    term_processing: "处理中...",
    term_not_found: "未找到命令",
    term_ask_usage: "用法: ask <问题>",
    placeholder_body: "此应用为演示版本。",
};

pub fn strings(locale: Locale) -> &'static ShellStrings {
    match locale {
        Locale::Ar => &AR,
        Locale::En => &EN,
        Locale::Zh => &ZH,
    }
}

/// Window and dock title for an application.
pub fn app_title(id: AppId, locale: Locale) -> &'static str {
    let (ar, en, zh) = match id {
        AppId::About => ("عن حمزة", "About Hamza", "关于 Hamza"),
        AppId::Terminal => ("PowerShell", "PowerShell", "PowerShell"),
        AppId::Projects => ("VS Code", "VS Code", "VS Code"),
        AppId::Youtube => ("Edge - Hamza TV", "Edge - Hamza TV", "Edge - Hamza TV"),
        AppId::Settings => ("الإعدادات", "Settings", "设置"),
        AppId::Files => ("مستكشف الملفات", "File Explorer", "文件资源管理器"),
        AppId::Calculator => ("الآلة الحاسبة", "Calculator", "计算器"),
        AppId::Editor => ("المفكرة", "Notepad", "记事本"),
        AppId::Android => ("أندرويد", "Android", "安卓"),
        AppId::Chess => ("الشطرنج", "Chess", "国际象棋"),
        AppId::Ludo => ("لودو", "Ludo", "飞行棋"),
        AppId::Uno => ("أونو", "UNO", "UNO"),
        AppId::GameCenter => ("ألعاب Xbox", "Xbox Games", "Xbox 游戏"),
        AppId::DevStudio => ("استوديو المطور", "Dev Studio", "开发工作室"),
        AppId::Word => ("Word", "Word", "Word"),
        AppId::Excel => ("Excel", "Excel", "Excel"),
        AppId::PowerPoint => ("PowerPoint", "PowerPoint", "PowerPoint"),
        AppId::Odoo => ("Odoo ERP", "Odoo ERP", "Odoo ERP"),
    };
    match locale {
        Locale::Ar => ar,
        Locale::En => en,
        Locale::Zh => zh,
    }
}

const WEEKDAYS: [[&str; 7]; 3] = [
    [
        "الأحد",
        "الاثنين",
        "الثلاثاء",
        "الأربعاء",
        "الخميس",
        "الجمعة",
        "السبت",
    ],
    [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    ["星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六"],
];

/// Long date for the calendar popover and lock screen, e.g. `Friday 17/05/2024`.
pub fn date_label(clock: LocalClock, locale: Locale) -> String {
    let row = match locale {
        Locale::Ar => 0,
        Locale::En => 1,
        Locale::Zh => 2,
    };
    let weekday = WEEKDAYS[row][(clock.weekday % 7) as usize];
    format!(
        "{weekday} {:02}/{:02}/{}",
        clock.day, clock.month, clock.year
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_app_has_a_title_in_every_locale() {
        for locale in Locale::ALL {
            for id in AppId::ALL {
                assert!(!app_title(id, locale).trim().is_empty(), "{id} / {locale:?}");
            }
        }
    }

    #[test]
    fn titles_follow_locale() {
        assert_eq!(app_title(AppId::Files, Locale::En), "File Explorer");
        assert_ne!(
            app_title(AppId::Files, Locale::Ar),
            app_title(AppId::Files, Locale::En)
        );
        assert_eq!(strings(Locale::Zh).setup_next, "下一步");
    }

    #[test]
    fn date_label_uses_localized_weekday() {
        let clock = LocalClock {
            year: 2024,
            month: 5,
            day: 17,
            weekday: 5,
            hour: 9,
            minute: 30,
        };
        assert_eq!(date_label(clock, Locale::En), "Friday 17/05/2024");
        assert_eq!(date_label(clock, Locale::Zh), "星期五 17/05/2024");
    }
}
