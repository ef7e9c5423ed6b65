#[cfg(test)]
mod static_file_tests {
    use actix_web::{http::StatusCode, test};
    use slowserve::api::server::build_app;

    use crate::common::{demo_site, settings_for, DATA_JSON, HELLO_TXT, INDEX_HTML, REAL_SLOW_JSON};

    #[actix_web::test]
    async fn serves_file_contents() {
        let site = demo_site();
        let app = test::init_service(build_app(&settings_for(site.path(), 4000))).await;

        for (uri, expected) in [("/hello.txt", HELLO_TXT), ("/data.json", DATA_JSON)] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            let body = test::read_body(resp).await;
            assert_eq!(body, expected.as_bytes(), "{uri}");
        }
    }

    #[actix_web::test]
    async fn directories_serve_their_index() {
        let site = demo_site();
        let app = test::init_service(build_app(&settings_for(site.path(), 4000))).await;

        for uri in ["/", "/solution/"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            assert_eq!(test::read_body(resp).await, INDEX_HTML.as_bytes());
        }
    }

    #[actix_web::test]
    async fn missing_file_is_not_found() {
        let site = demo_site();
        let app = test::init_service(build_app(&settings_for(site.path(), 4000))).await;

        let req = test::TestRequest::get().uri("/missing.txt").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn slow_suffix_followed_by_query_is_served_from_disk() {
        let site = demo_site();
        let app = test::init_service(build_app(&settings_for(site.path(), 4000))).await;

        let req = test::TestRequest::get().uri("/solution/slow.json?x=1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, REAL_SLOW_JSON.as_bytes());
    }
}
