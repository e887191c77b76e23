pub mod export_followers;
