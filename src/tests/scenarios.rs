use super::article;
use crate::sparsity::analyze;
use crate::{Detector, PageSignals, RawPage, classify};

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str, body: &str, url: &str, domain: &str) -> PageSignals {
        PageSignals {
            title: title.to_string(),
            body_text: body.to_string(),
            url: url.to_string(),
            domain: domain.to_string(),
            ..PageSignals::default()
        }
    }

    #[test]
    fn test_titled_404_on_sparse_page() {
        let signals = page(
            "404 - Page Not Found",
            &article(15),
            "https://example.com/some/thing",
            "example.com",
        );
        assert_eq!(analyze(&signals.body_text).multiplier, 2.0);

        let outcome = classify(&signals);
        assert!(outcome.is_404);
        assert!(outcome.confidence >= 80.0);
        assert!(outcome.indicators.iter().any(|i| i.contains("in title")));
    }

    #[test]
    fn test_long_article_is_not_404() {
        let signals = page(
            "Quarterly Report",
            &article(600),
            "https://example.com/reports/q3",
            "example.com",
        );
        let outcome = classify(&signals);
        assert!(!outcome.is_404);
        assert!(outcome.indicators.is_empty());
        assert!(outcome.confidence < 0.0);
    }

    #[test]
    fn test_facebook_unavailable_content_amid_chrome() {
        let body = format!(
            "{} This content isn't available right now. {}",
            article(400),
            article(400)
        );
        let signals = page("Facebook", &body, "https://www.facebook.com/some.post", "facebook.com");

        let outcome = classify(&signals);
        assert!(outcome.is_404);
        assert!(outcome.confidence >= 35.0);
        assert!(outcome.indicators.iter().any(|i| i.starts_with("platform")));

        // the same page elsewhere has no platform calibration to lean on
        let elsewhere = PageSignals {
            domain: "example.com".to_string(),
            ..signals
        };
        assert!(!classify(&elsewhere).is_404);
    }

    #[test]
    fn test_url_pattern_alone_is_not_enough() {
        let signals = page(
            "Archive",
            &article(300),
            "https://site.example/archive/2019/404.html",
            "site.example",
        );
        let outcome = classify(&signals);
        assert!(!outcome.is_404);
        assert_eq!(outcome.indicators.len(), 1);
        assert!(outcome.indicators[0].starts_with("url"));

        let titled = PageSignals {
            title: "Page Not Found".to_string(),
            ..signals
        };
        assert!(classify(&titled).is_404);
    }

    #[test]
    fn test_weak_indicators_on_sparse_page() {
        let body = "Sorry, that page was not found. It does not exist anymore. \
                    You may have followed a broken link. Please check the address \
                    and try again, or head back to our home page to keep browsing.";
        let sparsity = analyze(body);
        assert!((20..50).contains(&sparsity.word_count));

        let outcome = classify(&page("Company", body, "https://example.com/x", "example.com"));
        assert!(outcome.is_404);
        assert_eq!(
            outcome
                .indicators
                .iter()
                .filter(|i| i.starts_with("weak"))
                .count(),
            3
        );
    }

    #[test]
    fn test_not_found_in_body_of_varied_page() {
        let body = format!(
            "{} The item was not found. It doesn't exist here. Maybe a broken link sent you.",
            article(28)
        );
        let sparsity = analyze(&body);
        assert_eq!(sparsity.word_count, 41);
        // varied vocabulary and ordinary sentences: bracket score only
        assert_eq!(sparsity.sparsity_score, 25.0);

        let outcome = classify(&page("Shop", &body, "https://shop.example/p/1", "shop.example"));
        // 25 sparsity + 3 weak * 3 + medium body 25 * 0.6 * 1.5
        assert!((outcome.confidence - 56.5).abs() < 1e-9);
        assert!(outcome.is_404);
        assert!(outcome.indicators.iter().any(|i| i.starts_with("medium")));
    }

    #[test]
    fn test_meta_status_code() {
        let raw = RawPage {
            title: Some("Shop".to_string()),
            meta_tags: Some(vec![crate::MetaTag::new("prerender-status-code", "404")]),
            body_text: Some(article(60)),
            url: Some("https://shop.example/item/9".to_string()),
            ..RawPage::default()
        };
        let outcome = Detector::new().classify_raw(raw);
        // 50 fixed + 15 sparsity on a 60-word page clears the 55 threshold
        assert!(outcome.is_404);
        assert!(outcome.indicators.iter().any(|i| i.starts_with("meta")));
    }

    #[test]
    fn test_github_profile_from_html() {
        let html = r#"<html><head><title>Page not found · GitHub</title></head>
            <body><h1>404</h1><p>This is not the web page you are looking for.</p></body></html>"#;
        let outcome = Detector::new().classify_html(html, "https://github.com/nobody/nothing");
        assert!(outcome.is_404);
        assert!(outcome.indicators.iter().any(|i| i.starts_with("platform")));
    }

    #[test]
    fn test_custom_platform_from_config() {
        let config = r#"{
            "platforms": [{
                "name": "wiki",
                "domain": "wiki.example",
                "threshold_override": 20,
                "rules": [
                    {"pattern": "(?i)does not have an article", "weight": 40, "context": "body"}
                ]
            }]
        }"#;
        let detector = Detector::new().with_config_str(config).unwrap();
        let body = format!(
            "{} The wiki does not have an article with this exact name. {}",
            article(50),
            article(50)
        );
        let signals = page("Wiki", &body, "https://en.wiki.example/Nothing", "en.wiki.example");

        assert!(detector.classify(&signals).is_404);
        assert!(!Detector::new().classify(&signals).is_404);
    }

    #[test]
    fn test_high_platform_override_keeps_default_bar() {
        let config = r#"{
            "platforms": [{
                "name": "wiki",
                "domain": "wiki.example",
                "threshold_override": 70,
                "rules": [{"pattern": "(?i)gone away", "weight": 100, "context": "body"}]
            }]
        }"#;
        let detector = Detector::new().with_config_str(config).unwrap();
        let body = format!(
            "{} Sorry, this page has gone away. {}",
            article(150),
            article(150)
        );
        let signals = page("Wiki", &body, "https://wiki.example/Gone", "wiki.example");

        // 10 sparsity + 100 * 0.5 platform body hit
        let outcome = detector.classify(&signals);
        assert!((outcome.confidence - 60.0).abs() < 1e-9);
        assert!(outcome.is_404);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(Detector::new().with_config_str("{\"platforms\": 3}").is_err());
    }
}
