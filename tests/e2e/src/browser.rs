use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder().headless(true).build()?;
        let browser = ChromeBrowser::new(options)?;
        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    /// Inner text of the first element matching `selector`.
    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn count(&self, selector: &str) -> Result<usize> {
        self.tab.wait_for_element(selector)?;
        Ok(self.tab.find_elements(selector)?.len())
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Poll until the current URL path ends with `suffix`. Covers both a full
    /// page load and a client-side route change.
    pub fn wait_for_path(&self, suffix: &str) -> Result<String> {
        for _ in 0..50 {
            let url = self.tab.get_url();
            if url.ends_with(suffix) {
                return Ok(url);
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        anyhow::bail!("url never reached {suffix}, last was {}", self.tab.get_url())
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }
}
