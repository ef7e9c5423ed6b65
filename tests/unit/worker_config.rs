#[cfg(test)]
mod tests {
    use serde_json::json;
    use slowserve::prelude::*;
    use slowserve::worker::{RouteRegistration, StrategyKind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CountingHost {
        skipped: Arc<AtomicUsize>,
    }

    impl WorkerHost for CountingHost {
        fn skip_waiting(&self) {
            self.skipped.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct FakeWorkbox {
        scripts: Vec<String>,
        routes: Vec<RouteRegistration>,
    }

    impl CachingLibrary for FakeWorkbox {
        fn import_scripts(&mut self, url: &str) {
            self.scripts.push(url.to_string());
        }

        fn register_route(&mut self, route: RouteRegistration) {
            self.routes.push(route);
        }
    }

    #[test]
    fn worker_config_from_toml() {
        let config: WorkerConfig = toml::from_str(
            r#"
library_url = "https://cdn.example.com/workbox-sw.js"
abort_supported = true

[route]
pattern = "\\.json"
strategy = "stale-while-revalidate"
"#,
        )
        .expect("Failed to parse worker config");

        let host = CountingHost::default();
        let mut workbox = FakeWorkbox::default();
        let worker = ServiceWorker::install(&config, host.clone(), &mut workbox).unwrap();

        assert_eq!(workbox.scripts, vec!["https://cdn.example.com/workbox-sw.js".to_string()]);
        let route = &workbox.routes[0];
        assert_eq!(route.strategy, StrategyKind::StaleWhileRevalidate);
        assert_eq!(route.method, actix_web::http::Method::GET);
        assert!(route.matches("/stuck/slow.json"));
        assert!(!route.matches("/stuck/index.html"));

        let skip = json!({ "type": "skip-waiting" });
        assert_eq!(worker.handle_message(Some(&skip)), MessageOutcome::SkippedWaiting);
        assert_eq!(host.skipped.load(Ordering::SeqCst), 1);

        let abort = json!({ "type": "abort-connections" });
        assert_eq!(worker.handle_message(Some(&abort)), MessageOutcome::Aborted);
        assert!(route.fetch_signal.as_ref().unwrap().is_aborted());
    }

    #[test]
    fn empty_worker_config_is_the_normal_preset() {
        let config: WorkerConfig = toml::from_str("").unwrap();
        assert_eq!(config, WorkerConfig::preset(WorkerVariant::Normal));
    }

    #[test]
    fn presets_from_variant_names() {
        #[derive(serde::Deserialize)]
        struct Page {
            worker: WorkerVariant,
        }

        let page: Page = toml::from_str(r#"worker = "stuck""#).unwrap();
        let config = WorkerConfig::from(page.worker);
        assert_eq!(config.route.unwrap().pattern, r"\.json");
        assert!(!config.abort_supported);
    }

    #[test]
    fn messages_without_type_are_ignored_by_every_preset() {
        for variant in [WorkerVariant::Normal, WorkerVariant::Stuck, WorkerVariant::Solution] {
            let host = CountingHost::default();
            let mut workbox = FakeWorkbox::default();
            let worker = ServiceWorker::install(&WorkerConfig::preset(variant), host.clone(), &mut workbox).unwrap();

            assert_eq!(worker.handle_message(Some(&json!({ "kind": "skip-waiting" }))), MessageOutcome::Ignored);
            assert_eq!(worker.handle_message(None), MessageOutcome::Ignored);
            assert_eq!(host.skipped.load(Ordering::SeqCst), 0);
            for route in &workbox.routes {
                assert!(route.fetch_signal.as_ref().map_or(true, |signal| !signal.is_aborted()));
            }
        }
    }
}
