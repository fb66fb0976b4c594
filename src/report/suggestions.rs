// src/report/suggestions.rs
// =============================================================================
// This module turns failed checks into human-readable advice.
//
// The mapping is deterministic and stateless: one fixed message template per
// failed check, independent of every other check. The only variation is the
// measured value interpolated into the template (actual title length, load
// time, ...) and the locale of the copy. Locale affects message TEXT only -
// never which suggestions fire.
//
// Rust concepts:
// - An enum Locale selecting between translation tables
// - format! templates with interpolated measurements
// - A plain input struct so this stays decoupled from report assembly
// =============================================================================

use std::time::Duration;

use clap::ValueEnum;

/// Language of the generated suggestion copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// English
    En,
    /// Spanish
    Es,
}

/// The measurements and flags the generator looks at.
///
/// This intentionally mirrors the checklist plus the metric thresholds; the
/// pipeline fills it in from the analysis and the metrics provider.
#[derive(Debug, Clone)]
pub struct SuggestionInput {
    pub title_length: usize,
    pub meta_description_length: usize,
    pub h1_count: usize,
    pub img_without_alt: usize,
    pub has_canonical: bool,
    pub has_viewport: bool,
    pub https: bool,
    pub has_schema: bool,
    pub heading_hierarchy_valid: bool,
    pub url_length: usize,
    pub max_url_length: usize,
    pub load_time: Duration,
    pub load_time_threshold: Duration,
    pub fcp_ms: u32,
    pub lcp_ms: u32,
    pub cls: f64,
    pub has_robots_txt: bool,
    pub has_sitemap: bool,
    pub broken_links_count: usize,
}

/// One localized message per failed check, in fixed order.
pub fn generate_suggestions(input: &SuggestionInput, locale: Locale) -> Vec<String> {
    let mut suggestions = Vec::new();
    let load_time_ms = input.load_time.as_millis();

    if !(30..=60).contains(&input.title_length) {
        suggestions.push(match locale {
            Locale::En => format!(
                "Optimize the title length ({} characters). Ideal: 30-60 characters.",
                input.title_length
            ),
            Locale::Es => format!(
                "Optimiza la longitud del título ({} caracteres). Ideal: 30-60 caracteres.",
                input.title_length
            ),
        });
    }

    if !(120..=160).contains(&input.meta_description_length) {
        suggestions.push(match locale {
            Locale::En => format!(
                "Adjust the meta description length ({} characters). Ideal: 120-160 characters.",
                input.meta_description_length
            ),
            Locale::Es => format!(
                "Ajusta la longitud de la meta descripción ({} caracteres). Ideal: 120-160 caracteres.",
                input.meta_description_length
            ),
        });
    }

    if input.h1_count != 1 {
        suggestions.push(match locale {
            Locale::En => format!(
                "Make sure the page has exactly one H1. Current: {}",
                input.h1_count
            ),
            Locale::Es => format!(
                "Asegúrate de tener exactamente un H1 en la página. Actual: {}",
                input.h1_count
            ),
        });
    }

    if input.img_without_alt > 0 {
        suggestions.push(match locale {
            Locale::En => format!(
                "Add alternative text to the {} images that lack it.",
                input.img_without_alt
            ),
            Locale::Es => format!(
                "Añade texto alternativo a {} imágenes que carecen de él.",
                input.img_without_alt
            ),
        });
    }

    if !input.has_canonical {
        suggestions.push(fixed(
            locale,
            "Add a canonical tag to avoid duplicate-content problems.",
            "Añade una etiqueta canónica para evitar problemas de contenido duplicado.",
        ));
    }

    if !input.has_viewport {
        suggestions.push(fixed(
            locale,
            "Include a viewport tag to improve the experience on mobile devices.",
            "Incluye una etiqueta de viewport para mejorar la experiencia en dispositivos móviles.",
        ));
    }

    if !input.https {
        suggestions.push(fixed(
            locale,
            "Implement SSL to improve security and SEO.",
            "Implementa SSL para mejorar la seguridad y el SEO.",
        ));
    }

    if !input.has_schema {
        suggestions.push(fixed(
            locale,
            "Add schema markup to help search engines understand your content.",
            "Añade marcado de esquema para mejorar la comprensión de tu contenido por los motores de búsqueda.",
        ));
    }

    if !input.heading_hierarchy_valid {
        suggestions.push(fixed(
            locale,
            "Review and fix the heading hierarchy to improve the content structure.",
            "Revisa y corrige la jerarquía de encabezados para mejorar la estructura del contenido.",
        ));
    }

    if input.url_length > input.max_url_length {
        suggestions.push(match locale {
            Locale::En => format!(
                "Consider shortening the URL ({} characters). Shorter URLs are preferable.",
                input.url_length
            ),
            Locale::Es => format!(
                "Considera acortar la URL ({} caracteres). Las URLs más cortas son preferibles.",
                input.url_length
            ),
        });
    }

    if input.load_time > input.load_time_threshold {
        suggestions.push(match locale {
            Locale::En => format!(
                "Improve the page load time ({}ms). Target: under 3 seconds.",
                load_time_ms
            ),
            Locale::Es => format!(
                "Mejora el tiempo de carga de la página ({}ms). Objetivo: menos de 3 segundos.",
                load_time_ms
            ),
        });
    }

    if input.fcp_ms > 1800 {
        suggestions.push(match locale {
            Locale::En => format!(
                "Optimize the First Contentful Paint ({}ms). Target: under 1.8 seconds.",
                input.fcp_ms
            ),
            Locale::Es => format!(
                "Optimiza el First Contentful Paint ({}ms). Objetivo: menos de 1.8 segundos.",
                input.fcp_ms
            ),
        });
    }

    if input.lcp_ms > 2500 {
        suggestions.push(match locale {
            Locale::En => format!(
                "Improve the Largest Contentful Paint ({}ms). Target: under 2.5 seconds.",
                input.lcp_ms
            ),
            Locale::Es => format!(
                "Mejora el Largest Contentful Paint ({}ms). Objetivo: menos de 2.5 segundos.",
                input.lcp_ms
            ),
        });
    }

    if input.cls > 0.1 {
        suggestions.push(match locale {
            Locale::En => format!(
                "Reduce the Cumulative Layout Shift ({:.2}). Target: under 0.1.",
                input.cls
            ),
            Locale::Es => format!(
                "Reduce el Cumulative Layout Shift ({:.2}). Objetivo: menos de 0.1.",
                input.cls
            ),
        });
    }

    if !input.has_robots_txt {
        suggestions.push(fixed(
            locale,
            "Create a robots.txt file to control bot access to your site.",
            "Crea un archivo robots.txt para controlar el acceso de los bots a tu sitio.",
        ));
    }

    if !input.has_sitemap {
        suggestions.push(fixed(
            locale,
            "Generate an XML sitemap to help search engines index your content.",
            "Genera un sitemap XML para ayudar a los motores de búsqueda a indexar tu contenido.",
        ));
    }

    if input.broken_links_count > 0 {
        suggestions.push(match locale {
            Locale::En => format!(
                "Fix {} broken links to improve user experience and SEO.",
                input.broken_links_count
            ),
            Locale::Es => format!(
                "Corrige {} enlaces rotos para mejorar la experiencia del usuario y el SEO.",
                input.broken_links_count
            ),
        });
    }

    suggestions
}

fn fixed(locale: Locale, en: &str, es: &str) -> String {
    match locale {
        Locale::En => en.to_string(),
        Locale::Es => es.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy_input() -> SuggestionInput {
        SuggestionInput {
            title_length: 45,
            meta_description_length: 140,
            h1_count: 1,
            img_without_alt: 0,
            has_canonical: true,
            has_viewport: true,
            https: true,
            has_schema: true,
            heading_hierarchy_valid: true,
            url_length: 30,
            max_url_length: 75,
            load_time: Duration::from_millis(800),
            load_time_threshold: Duration::from_millis(3000),
            fcp_ms: 900,
            lcp_ms: 1500,
            cls: 0.05,
            has_robots_txt: true,
            has_sitemap: true,
            broken_links_count: 0,
        }
    }

    #[test]
    fn test_healthy_page_gets_no_suggestions() {
        assert!(generate_suggestions(&healthy_input(), Locale::En).is_empty());
        assert!(generate_suggestions(&healthy_input(), Locale::Es).is_empty());
    }

    #[test]
    fn test_locale_changes_text_not_which_suggestions_fire() {
        let mut input = healthy_input();
        input.https = false;
        input.broken_links_count = 3;

        let en = generate_suggestions(&input, Locale::En);
        let es = generate_suggestions(&input, Locale::Es);

        assert_eq!(en.len(), es.len());
        assert!(en[0].contains("SSL"));
        assert!(es[0].contains("SSL"));
        assert!(en[1].contains("3 broken links"));
        assert!(es[1].contains("3 enlaces rotos"));
    }

    #[test]
    fn test_measured_values_are_interpolated() {
        let mut input = healthy_input();
        input.title_length = 7;
        input.load_time = Duration::from_millis(4200);

        let suggestions = generate_suggestions(&input, Locale::En);
        assert!(suggestions.iter().any(|s| s.contains("(7 characters)")));
        assert!(suggestions.iter().any(|s| s.contains("(4200ms)")));
    }

    #[test]
    fn test_metric_thresholds() {
        let mut input = healthy_input();
        input.fcp_ms = 2000;
        input.lcp_ms = 3000;
        input.cls = 0.18;

        let suggestions = generate_suggestions(&input, Locale::En);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[0].contains("First Contentful Paint"));
        assert!(suggestions[1].contains("Largest Contentful Paint"));
        assert!(suggestions[2].contains("0.18"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut input = healthy_input();
        input.has_sitemap = false;
        assert_eq!(
            generate_suggestions(&input, Locale::Es),
            generate_suggestions(&input, Locale::Es)
        );
    }
}
