mod site_config;

pub use site_config::{ load_site_config, SiteConfig };
