//! Two-language string table for the site.
//!
//! Every piece of user-facing copy is registered here once, keyed by a
//! content id, with the English and Polish versions authored side by side.
//! Components call `t(key, lang)` instead of branching on the language
//! inline, so toggling the language re-renders the whole page from the
//! other column of this table.

/// Active display language. The site launches in Polish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    En,
    Pl,
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Pl
    }
}

impl Lang {
    /// Flip to the other supported language.
    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::Pl,
            Lang::Pl => Lang::En,
        }
    }
}

struct Entry {
    key: &'static str,
    en: &'static str,
    pl: &'static str,
}

/// Look up a string by content id. Unknown keys render as the key itself,
/// which never happens for the fixed key set (guarded by tests below).
pub fn t(key: &'static str, lang: Lang) -> &'static str {
    match STRINGS.iter().find(|e| e.key == key) {
        Some(entry) => match lang {
            Lang::En => entry.en,
            Lang::Pl => entry.pl,
        },
        None => key,
    }
}

macro_rules! entry {
    ($key:literal, $en:literal, $pl:literal) => {
        Entry {
            key: $key,
            en: $en,
            pl: $pl,
        }
    };
}

static STRINGS: &[Entry] = &[
    // navigation
    entry!("nav.services", "Services", "Usługi"),
    entry!("nav.about", "About", "O nas"),
    entry!("nav.team", "Team", "Zespół"),
    entry!("nav.contact", "Contact", "Kontakt"),
    // the toggle shows the language you would switch to
    entry!("nav.lang-toggle", "PL", "EN"),
    // hero
    entry!(
        "hero.lead",
        "We create modern technology solutions for companies that want to grow through applications, data, automation, and AI.",
        "Tworzymy nowoczesne rozwiązania technologiczne dla firm, które chcą rozwijać się poprzez aplikacje, dane, automatyzację i AI."
    ),
    entry!("hero.cta", "Start Your Project", "Rozpocznij swój projekt"),
    entry!(
        "value.innovation.title",
        "Innovation First",
        "Innowacja na pierwszym miejscu"
    ),
    entry!(
        "value.innovation.body",
        "Cutting-edge solutions using the latest cloud and AI technologies",
        "Najnowocześniejsze rozwiązania wykorzystujące najnowsze technologie chmurowe i AI"
    ),
    entry!(
        "value.trust.title",
        "Trust & Security",
        "Zaufanie i bezpieczeństwo"
    ),
    entry!(
        "value.trust.body",
        "GDPR and HIPAA compliant solutions with enterprise-grade security",
        "Rozwiązania zgodne z GDPR i HIPAA z zabezpieczeniami klasy korporacyjnej"
    ),
    entry!(
        "value.results.title",
        "Results Driven",
        "Zorientowani na wyniki"
    ),
    entry!(
        "value.results.body",
        "End-to-end solutions that solve real business problems",
        "Kompleksowe rozwiązania, które rozwiązują rzeczywiste problemy biznesowe"
    ),
    // services
    entry!("services.title", "Our Services", "Nasze usługi"),
    entry!(
        "services.lead",
        "We operate where processes become complex, and decisions require better insights, regardless of the industry.",
        "Działamy tam, gdzie procesy stają się złożone, a decyzje wymagają lepszego wglądu, niezależnie od branży."
    ),
    entry!(
        "services.cloud.title",
        "Cloud Data Engineering & Infrastructure",
        "Inżynieria i infrastruktura danych w chmurze"
    ),
    entry!(
        "services.cloud.tagline",
        "Designing and implementing modern data platforms",
        "Projektowanie i wdrażanie nowoczesnych platform danych"
    ),
    entry!(
        "services.cloud.item1",
        "Building scalable data architectures in the cloud (AWS, GCP, Azure)",
        "Budowanie skalowalnych architektur danych w chmurze (AWS, GCP, Azure)"
    ),
    entry!(
        "services.cloud.item2",
        "Setting up data lakes, data warehouses (Redshift, BigQuery)",
        "Konfiguracja jezior danych, hurtowni danych (Redshift, BigQuery)"
    ),
    entry!(
        "services.cloud.item3",
        "Real-time and batch ETL/ELT data pipelines",
        "Potoki danych ETL/ELT w czasie rzeczywistym i wsadowym"
    ),
    entry!(
        "services.cloud.item4",
        "GDPR and HIPAA compliant data management strategies",
        "Strategie zarządzania danymi zgodne z GDPR i HIPAA"
    ),
    entry!(
        "services.cloud.cta",
        "Let's talk about your data architecture",
        "Porozmawiajmy o Twojej architekturze danych"
    ),
    entry!(
        "services.apps.title",
        "Applications, Custom Software & Automation",
        "Aplikacje, oprogramowanie na zamówienie i automatyzacja"
    ),
    entry!(
        "services.apps.tagline",
        "Solutions tailored to your business processes",
        "Rozwiązania dostosowane do Twoich procesów biznesowych"
    ),
    entry!(
        "services.apps.item1",
        "Highly personalized and scalable desktop and web applications",
        "Wysoce spersonalizowane i skalowalne aplikacje desktopowe i webowe"
    ),
    entry!(
        "services.apps.item2",
        "Automating operational tasks and processes",
        "Automatyzacja zadań i procesów operacyjnych"
    ),
    entry!(
        "services.apps.item3",
        "Lightweight internal tools for team efficiency",
        "Lekkie narzędzia wewnętrzne dla efektywności zespołu"
    ),
    entry!(
        "services.apps.cta",
        "Develop a custom solution with us",
        "Stwórz z nami rozwiązanie na miarę"
    ),
    entry!(
        "services.ai.title",
        "Artificial Intelligence & Machine Learning",
        "Sztuczna inteligencja i uczenie maszynowe"
    ),
    entry!(
        "services.ai.tagline",
        "From LLMs to predictive systems",
        "Od LLM po systemy predykcyjne"
    ),
    entry!(
        "services.ai.item1",
        "Generative AI and large language models for business use cases",
        "Generatywna sztuczna inteligencja i duże modele językowe dla zastosowań biznesowych"
    ),
    entry!(
        "services.ai.item2",
        "RAG systems with knowledge bases and semantic search",
        "Systemy RAG z bazami wiedzy i wyszukiwaniem semantycznym"
    ),
    entry!(
        "services.ai.item3",
        "AI agents for customer support and process automation",
        "Agenci AI do obsługi klienta i automatyzacji procesów"
    ),
    entry!(
        "services.ai.cta",
        "Replace manual work with AI Agent",
        "Zastąp pracę ręczną agentem AI"
    ),
    entry!(
        "services.analytics.title",
        "Data Analytics & Business Intelligence",
        "Analityka danych i Business Intelligence"
    ),
    entry!(
        "services.analytics.tagline",
        "Complete analytics environment for business and tech teams",
        "Kompletne środowisko analityczne dla zespołów biznesowych i technicznych"
    ),
    entry!(
        "services.analytics.item1",
        "Advanced dashboards in Power BI, Tableau, Looker",
        "Zaawansowane dashboardy w Power BI, Tableau, Looker"
    ),
    entry!(
        "services.analytics.item2",
        "High-value business metrics and pattern analysis",
        "Wysokiej wartości metryki biznesowe i analiza wzorców"
    ),
    entry!(
        "services.analytics.item3",
        "Custom reports and ad-hoc analyses",
        "Raporty niestandardowe i analizy ad-hoc"
    ),
    entry!(
        "services.analytics.cta",
        "Boost your company's efficiency",
        "Zwiększ efektywność swojej firmy"
    ),
    // training banner
    entry!(
        "training.title",
        "Training & Workshops",
        "Szkolenia i warsztaty"
    ),
    entry!(
        "training.lead",
        "We boost your team's competencies in AI",
        "Podnosimy kompetencje Twojego zespołu w zakresie AI"
    ),
    entry!(
        "training.item1",
        "Training in generative AI, LLMs, RAG systems",
        "Szkolenia z generatywnej AI, LLM, systemów RAG"
    ),
    entry!(
        "training.item2",
        "Tailored programs for technical and non-technical teams",
        "Programy dostosowane do zespołów technicznych i nietechnicznych"
    ),
    entry!(
        "training.item3",
        "Hands-on workshops on AI integration",
        "Praktyczne warsztaty z integracji AI"
    ),
    entry!(
        "training.cta",
        "BOOK A CUSTOM TRAINING",
        "ZAREZERWUJ SZKOLENIE"
    ),
    // about
    entry!("about.title", "Why ReSH?", "Dlaczego ReSH?"),
    entry!(
        "about.lead",
        "Requena Software House combines expertise, innovation, and reliability",
        "Requena Software House łączy wiedzę, innowacje i niezawodność"
    ),
    entry!(
        "about.expertise.title",
        "Proven Expertise",
        "Sprawdzona wiedza"
    ),
    entry!(
        "about.expertise.body",
        "Successfully delivered and deployed verified applications for key industry enterprises.",
        "Z powodzeniem dostarczyliśmy i wdrożyliśmy sprawdzone aplikacje dla kluczowych przedsiębiorstw z branży."
    ),
    entry!(
        "about.endtoend.title",
        "End-to-End Solutions",
        "Kompleksowe rozwiązania"
    ),
    entry!(
        "about.endtoend.body",
        "From data architecture to fully deployed applications",
        "Od architektury danych po w pełni wdrożone aplikacje"
    ),
    entry!(
        "about.security.title",
        "Security & Compliance",
        "Bezpieczeństwo i zgodność"
    ),
    entry!(
        "about.security.body",
        "Top security standards with regulatory compliance",
        "Najwyższe standardy bezpieczeństwa i zgodność z przepisami"
    ),
    entry!(
        "about.agile.title",
        "Agile Methodology",
        "Metodologia Agile"
    ),
    entry!(
        "about.agile.body",
        "Efficient Agile model trusted by leading companies",
        "Efektywny model Agile, któremu zaufały wiodące firmy"
    ),
    entry!(
        "about.multi.title",
        "Multi-Disciplinary",
        "Wielodyscyplinarność"
    ),
    entry!(
        "about.multi.body",
        "Data, software engineering, and AI product design skills",
        "Umiejętności w zakresie danych, inżynierii oprogramowania i projektowania produktów AI"
    ),
    entry!(
        "about.support.title",
        "Long-term Support",
        "Długoterminowe wsparcie"
    ),
    entry!(
        "about.support.body",
        "Guaranteed security, compliance, and ongoing support",
        "Gwarantowane bezpieczeństwo, zgodność i bieżące wsparcie"
    ),
    entry!(
        "about.cta",
        "Build your algorithmic advantage with us",
        "Zbuduj z nami swoją przewagę algorytmiczną"
    ),
    entry!("about.visit", "Visit ElixaAI", "Odwiedź ElixaAI"),
    // team
    entry!("team.title", "Our Team", "Nasz zespół"),
    entry!(
        "team.lead",
        "A small, close-knit team combining technical, analytical, and creative skills—operating from Poland but working remotely with clients from the EU and USA.",
        "Mały, zgrany zespół łączący umiejętności techniczne, analityczne i kreatywne — działający z Polski, ale pracujący zdalnie z klientami z UE i USA."
    ),
    entry!(
        "team.michal.role",
        "Backend Developer",
        "Backend Developer"
    ),
    entry!(
        "team.michal.bio",
        "Expert in architecture and integration of complex systems, design of scalable solutions, and management of databases and cloud infrastructure.",
        "Ekspert w architekturze i integracji złożonych systemów, projektowaniu skalowalnych rozwiązań oraz zarządzaniu bazami danych i infrastrukturą chmurową."
    ),
    entry!(
        "team.lukasz.role",
        "Frontend Developer",
        "Frontend Developer"
    ),
    entry!(
        "team.lukasz.bio",
        "Focuses on architecting front-end solutions that are fundamentally geared towards delivering fast, intuitive, and truly modern user experiences.",
        "Skupia się na projektowaniu rozwiązań frontendowych, które są fundamentalnie nastawione na dostarczanie szybkich, intuicyjnych i rzeczywiście nowoczesnych doświadczeń użytkownika."
    ),
    entry!("team.pawel.role", "Strategist", "Strateg"),
    entry!(
        "team.pawel.bio",
        "Bridge between the data world and real client needs. Operates at the intersection of technology and culture.",
        "Pomost między światem danych a rzeczywistymi potrzebami klienta. Działa na styku technologii i kultury."
    ),
    entry!(
        "team.outro",
        "Together, we form ReSH – Requena Software House—a team that truly understands data and people.",
        "Razem tworzymy ReSH – Requena Software House – zespół, który naprawdę rozumie dane i ludzi."
    ),
    // contact
    entry!("contact.title", "Contact Us", "Skontaktuj się z nami"),
    entry!(
        "contact.lead",
        "Let's discuss your project. We'll respond within 24 hours.",
        "Porozmawiajmy o Twoim projekcie. Odpowiemy w ciągu 24 godzin."
    ),
    entry!("contact.name.label", "Name", "Imię"),
    entry!("contact.name.placeholder", "Your name", "Twoje imię"),
    entry!("contact.email.label", "Email", "Email"),
    entry!(
        "contact.email.placeholder",
        "your@email.com",
        "your@email.com"
    ),
    entry!(
        "contact.company.label",
        "Company name / industry",
        "Nazwa firmy / branża"
    ),
    entry!(
        "contact.company.placeholder",
        "Your company and industry",
        "Twoja firma i branża"
    ),
    entry!(
        "contact.category.label",
        "Contact Category",
        "Kategoria kontaktu"
    ),
    entry!(
        "contact.category.placeholder",
        "Select a category",
        "Wybierz kategorię"
    ),
    entry!(
        "contact.category.cloud-data",
        "Cloud Data Engineering & Infrastructure",
        "Inżynieria i infrastruktura danych w chmurze"
    ),
    entry!(
        "contact.category.applications",
        "Applications & Custom Software",
        "Aplikacje i oprogramowanie na zamówienie"
    ),
    entry!(
        "contact.category.ai-ml",
        "Artificial Intelligence & ML",
        "Sztuczna inteligencja i ML"
    ),
    entry!(
        "contact.category.data-analytics",
        "Data Analytics & Business Intelligence",
        "Analityka danych i Business Intelligence"
    ),
    entry!(
        "contact.category.training",
        "Training & Workshops",
        "Szkolenia i warsztaty"
    ),
    entry!(
        "contact.category.general",
        "General Inquiry",
        "Zapytanie ogólne"
    ),
    entry!(
        "contact.description.label",
        "Description of your need / project",
        "Opis Twojej potrzeby / projektu"
    ),
    entry!(
        "contact.description.placeholder",
        "Tell us about your project requirements...",
        "Opowiedz nam o wymaganiach Twojego projektu..."
    ),
    entry!(
        "contact.consent.label",
        "I consent to the processing of personal data in accordance with the privacy policy.",
        "Wyrażam zgodę na przetwarzanie danych osobowych zgodnie z polityką prywatności."
    ),
    entry!("contact.submit", "Send Inquiry", "Wyślij zapytanie"),
    entry!("contact.submitting", "Sending...", "Wysyłanie..."),
    entry!(
        "contact.status.missing-fields",
        "Please fill required fields and accept consent.",
        "Uzupełnij wymagane pola i zaznacz zgodę."
    ),
    entry!(
        "contact.status.sent",
        "Message sent. Thank you!",
        "Wiadomość wysłana. Dziękujemy!"
    ),
    entry!(
        "contact.status.failed",
        "Something went wrong.",
        "Coś poszło nie tak."
    ),
    entry!(
        "contact.status.server-error",
        "Server error.",
        "Błąd serwera."
    ),
    entry!(
        "contact.follow",
        "Stay up to date, follow us here:",
        "Bądź na bieżąco, śledź nas tutaj:"
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Lang::En.toggled(), Lang::Pl);
        assert_eq!(Lang::Pl.toggled(), Lang::En);
        assert_eq!(Lang::En.toggled().toggled(), Lang::En);
        assert_eq!(Lang::Pl.toggled().toggled(), Lang::Pl);
    }

    #[test]
    fn default_language_is_polish() {
        assert_eq!(Lang::default(), Lang::Pl);
    }

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for entry in STRINGS {
            assert!(seen.insert(entry.key), "duplicate key: {}", entry.key);
        }
    }

    #[test]
    fn both_translations_are_authored() {
        for entry in STRINGS {
            assert!(!entry.en.is_empty(), "missing en for {}", entry.key);
            assert!(!entry.pl.is_empty(), "missing pl for {}", entry.key);
        }
    }

    #[test]
    fn toggling_twice_restores_every_string() {
        for entry in STRINGS {
            for lang in [Lang::En, Lang::Pl] {
                assert_eq!(t(entry.key, lang), t(entry.key, lang.toggled().toggled()));
            }
        }
    }

    /// Extract the first string literal of every lookup call in a source
    /// file. Conservative: only direct literal keys are matched, which is the
    /// only form used in this crate.
    fn extract_keys(source: &str) -> Vec<String> {
        let mut keys = Vec::new();
        let bytes = source.as_bytes();
        let mut i = 0;
        while let Some(pos) = source[i..].find("t(\"") {
            let start = i + pos;
            // require a non-identifier character before the `t` so that
            // calls like `.split("` or `get("` are not picked up
            let preceded_ok = if start == 0 {
                true
            } else {
                let prev = bytes[start - 1] as char;
                !(prev.is_ascii_alphanumeric() || prev == '_' || prev == '.')
            };
            let lit_start = start + 3;
            if preceded_ok {
                if let Some(end) = source[lit_start..].find('"') {
                    keys.push(source[lit_start..lit_start + end].to_string());
                }
            }
            i = lit_start;
        }
        keys
    }

    #[test]
    fn every_referenced_key_exists() {
        let table: HashSet<&str> = STRINGS.iter().map(|e| e.key).collect();
        let src_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
        let mut stack = vec![src_root];
        let mut checked = 0usize;
        while let Some(path) = stack.pop() {
            if path.is_dir() {
                for entry in std::fs::read_dir(&path).unwrap().flatten() {
                    stack.push(entry.path());
                }
            } else if path.extension().map_or(false, |e| e == "rs") {
                let source = std::fs::read_to_string(&path).unwrap();
                for key in extract_keys(&source) {
                    assert!(
                        table.contains(key.as_str()),
                        "{} references unknown key {:?}",
                        path.display(),
                        key
                    );
                    checked += 1;
                }
            }
        }
        assert!(checked > 0, "no t(\"...\") call sites found under src/");
    }

    #[test]
    fn lookup_returns_the_requested_column() {
        assert_eq!(t("nav.services", Lang::En), "Services");
        assert_eq!(t("nav.services", Lang::Pl), "Usługi");
        // the toggle label advertises the other language
        assert_eq!(t("nav.lang-toggle", Lang::Pl), "EN");
        assert_eq!(t("nav.lang-toggle", Lang::En), "PL");
    }
}
