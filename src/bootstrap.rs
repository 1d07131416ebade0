use crate::{router, App};
use zino::prelude::*;

/// Boot-time checks that run once the application state is loaded.
pub(crate) fn init() -> Plugin {
    let loader = Box::pin(async {
        let table = router::routes();
        let routes = serde_json::to_value(&table).map_err(Error::from)?;
        tracing::info!(base_url = router::base_url(), %routes, "route table mounted");
        for route in &table {
            tracing::debug!(name = route.name, href = %route.href(), "route active");
        }

        if let Some(config) = App::config().get_table("desktop") {
            if let Some(stylesheets) = config.get_str_array("stylesheets") {
                for style in stylesheets {
                    if style.starts_with("https://") || style.starts_with("http://") {
                        continue;
                    }
                    let style_file = App::parse_path(style);
                    if !style_file.exists() {
                        return Err(Error::new(format!(
                            "stylesheet `{style}` resolves to `{}`, which does not exist",
                            style_file.display()
                        )));
                    }
                }
            }
        }
        Ok(())
    });
    let mut plugin = Plugin::new("boot-check");
    plugin.set_loader(loader);
    plugin
}
