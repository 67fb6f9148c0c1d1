use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(
        body.contains("Get Started with RideFlow") || body.contains("DOCTYPE"),
        "Should contain HTML"
    );
}

#[tokio::test]
async fn test_welcome_screen_renders_heading_and_single_action() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    let heading = page.find_element("h2.welcome_heading").expect("heading");
    assert_eq!(heading.trim(), "Get Started with RideFlow");

    assert_eq!(page.count(".welcome a").expect("links"), 1);
    let action = page.find_element("a.welcome_continue").expect("continue");
    assert_eq!(action.trim(), "Continue");

    assert!(page.find_element("img.welcome_logo").is_ok(), "Logo should exist");
}

#[tokio::test]
async fn test_continue_navigates_to_login() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.click("a.welcome_continue").expect("Failed to click Continue");

    let url = page.wait_for_path("/login").expect("Continue should route to /login");
    assert_eq!(page.url().expect("Failed to read url"), url);

    let heading = page.find_element("h2").expect("login heading");
    assert_eq!(heading.trim(), "Log in to RideFlow");
}
