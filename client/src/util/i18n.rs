//! Static translation tables and key lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages ask for copy by dotted key (`home.hero.title`). Lookup is a plain
//! table scan over compiled-in strings; there is no loader, no plural rules,
//! and an unknown key renders as itself so missing copy is visible on the page.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Languages the site ships copy for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ko,
}

impl Language {
    /// BCP 47 tag, mirrored onto `<html lang>` by [`apply_document_language`].
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ko => "ko",
        }
    }

    /// The other language; the navbar switch flips between the two.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ko,
            Self::Ko => Self::En,
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => EN,
            Self::Ko => KO,
        }
    }
}

/// Set `<html lang>` to `lang`.
///
/// Returns `false` when there is no document to update.
pub fn apply_document_language(lang: Language) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return false;
        };
        if let Err(e) = root.set_attribute("lang", lang.code()) {
            log::warn!("failed to set document language: {e:?}");
            return false;
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
        false
    }
}

/// Look up `key` in `lang`'s table, echoing the key when it is missing.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    lang.table()
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, v)| *v)
}

/// Look up `key` and substitute `{name}` placeholders from `args`.
pub fn translate_with(lang: Language, key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(translate(lang, key).to_owned(), |text, (name, value)| text.replace(&format!("{{{name}}}"), value))
}

const EN: &[(&str, &str)] = &[
    ("nav.docs", "Docs"),
    ("nav.features", "Features"),
    ("nav.pricing", "Pricing"),
    ("nav.download", "Download"),
    ("nav.toggle_theme", "Toggle theme"),
    ("nav.change_language", "Change language"),
    ("home.hero.title", "Test STOMP Messaging with Confidence"),
    (
        "home.hero.subtitle",
        "Stompilot is a desktop client for connecting to, inspecting, and debugging STOMP brokers in real time.",
    ),
    ("home.hero.download", "Download Now"),
    ("home.scroll", "Scroll to explore"),
    ("home.features.title", "Why Stompilot?"),
    ("home.features.realtime.title", "Real-time Messaging"),
    ("home.features.realtime.description", "Send and receive STOMP frames instantly and watch every message as it arrives."),
    ("home.features.performance.title", "High Performance"),
    ("home.features.performance.description", "A native desktop app that stays responsive under heavy message traffic."),
    ("home.features.intuitive.title", "Intuitive Interface"),
    ("home.features.intuitive.description", "Connect, subscribe, and publish without writing a single line of code."),
    ("home.features.customizable.title", "Customizable"),
    ("home.features.customizable.description", "Save connection profiles, headers, and message templates for reuse."),
    ("home.features.secure.title", "Secure"),
    ("home.features.secure.description", "TLS connections and authentication headers are supported out of the box."),
    ("home.features.cloud.title", "Cloud Ready"),
    ("home.features.cloud.description", "Works with local brokers and hosted WebSocket endpoints alike."),
    ("home.stats.users", "Active Users"),
    ("home.stats.uptime", "Uptime"),
    ("home.stats.support", "Support"),
    ("home.testimonials.title", "What Developers Say"),
    ("home.testimonials.testimonial1.name", "Minjun Kim"),
    ("home.testimonials.testimonial1.role", "Backend Engineer"),
    ("home.testimonials.testimonial1.content", "Debugging our chat service's STOMP traffic went from hours to minutes."),
    ("home.testimonials.testimonial2.name", "Sarah Lee"),
    ("home.testimonials.testimonial2.role", "Full-stack Developer"),
    ("home.testimonials.testimonial2.content", "Finally a STOMP client that feels like a real desktop tool."),
    ("home.testimonials.testimonial3.name", "Daniel Park"),
    ("home.testimonials.testimonial3.role", "QA Lead"),
    ("home.testimonials.testimonial3.content", "Saved templates let our team replay the same scenarios every release."),
    ("home.cta.title", "Ready to get started?"),
    ("home.cta.description", "Download Stompilot for free and start testing your STOMP endpoints today."),
    ("home.cta.button", "Get Stompilot"),
    ("download.title", "Download Stompilot"),
    ("download.subtitle", "Choose the installer for your operating system."),
    ("download.windows.description", "Installer for Windows 10 and later."),
    ("download.mac.description", "Disk image for macOS 11 Big Sur and later."),
    ("download.linux.description", "Portable AppImage for most Linux distributions."),
    ("download.button", "Download for {platform}"),
    ("download.requirements.title", "System Requirements"),
    ("download.requirements.windows", "Windows 10 or later (64-bit)"),
    ("download.requirements.mac", "macOS 11 Big Sur or later"),
    ("download.requirements.memory", "4 GB RAM minimum, 8 GB recommended"),
    ("notfound.message", "Page not found."),
];

const KO: &[(&str, &str)] = &[
    ("nav.docs", "문서"),
    ("nav.features", "기능"),
    ("nav.pricing", "가격"),
    ("nav.download", "다운로드"),
    ("nav.toggle_theme", "테마 전환"),
    ("nav.change_language", "언어 변경"),
    ("home.hero.title", "STOMP 메시징을 자신 있게 테스트하세요"),
    ("home.hero.subtitle", "Stompilot은 STOMP 브로커에 연결하고 메시지를 실시간으로 검사하고 디버깅하는 데스크톱 클라이언트입니다."),
    ("home.hero.download", "지금 다운로드"),
    ("home.scroll", "스크롤하여 살펴보기"),
    ("home.features.title", "왜 Stompilot인가요?"),
    ("home.features.realtime.title", "실시간 메시징"),
    ("home.features.realtime.description", "STOMP 프레임을 즉시 주고받고 도착하는 모든 메시지를 확인하세요."),
    ("home.features.performance.title", "높은 성능"),
    ("home.features.performance.description", "메시지가 많아도 빠르게 반응하는 네이티브 데스크톱 앱입니다."),
    ("home.features.intuitive.title", "직관적인 인터페이스"),
    ("home.features.intuitive.description", "코드 한 줄 없이 연결, 구독, 발행할 수 있습니다."),
    ("home.features.customizable.title", "맞춤 설정"),
    ("home.features.customizable.description", "연결 프로필, 헤더, 메시지 템플릿을 저장하고 재사용하세요."),
    ("home.features.secure.title", "보안"),
    ("home.features.secure.description", "TLS 연결과 인증 헤더를 기본으로 지원합니다."),
    ("home.features.cloud.title", "클라우드 지원"),
    ("home.features.cloud.description", "로컬 브로커와 호스팅된 WebSocket 엔드포인트 모두에서 동작합니다."),
    ("home.stats.users", "활성 사용자"),
    ("home.stats.uptime", "가동률"),
    ("home.stats.support", "지원"),
    ("home.testimonials.title", "개발자들의 이야기"),
    ("home.testimonials.testimonial1.name", "김민준"),
    ("home.testimonials.testimonial1.role", "백엔드 엔지니어"),
    ("home.testimonials.testimonial1.content", "채팅 서비스의 STOMP 트래픽 디버깅이 몇 시간에서 몇 분으로 줄었습니다."),
    ("home.testimonials.testimonial2.name", "이사라"),
    ("home.testimonials.testimonial2.role", "풀스택 개발자"),
    ("home.testimonials.testimonial2.content", "드디어 제대로 된 데스크톱 STOMP 클라이언트를 만났습니다."),
    ("home.testimonials.testimonial3.name", "박다니엘"),
    ("home.testimonials.testimonial3.role", "QA 리드"),
    ("home.testimonials.testimonial3.content", "저장된 템플릿으로 릴리스마다 같은 시나리오를 반복할 수 있습니다."),
    ("home.cta.title", "시작할 준비가 되셨나요?"),
    ("home.cta.description", "Stompilot을 무료로 다운로드하고 지금 STOMP 엔드포인트를 테스트하세요."),
    ("home.cta.button", "Stompilot 받기"),
    ("download.title", "Stompilot 다운로드"),
    ("download.subtitle", "운영체제에 맞는 설치 파일을 선택하세요."),
    ("download.windows.description", "Windows 10 이상용 설치 프로그램입니다."),
    ("download.mac.description", "macOS 11 Big Sur 이상용 디스크 이미지입니다."),
    ("download.linux.description", "대부분의 리눅스 배포판에서 실행되는 AppImage입니다."),
    ("download.button", "{platform}용 다운로드"),
    ("download.requirements.title", "시스템 요구 사항"),
    ("download.requirements.windows", "Windows 10 이상 (64비트)"),
    ("download.requirements.mac", "macOS 11 Big Sur 이상"),
    ("download.requirements.memory", "최소 4GB RAM, 8GB 권장"),
    ("notfound.message", "페이지를 찾을 수 없습니다."),
];
