mod analyse_tests;
mod export_tests;
mod home_tests;
mod upload_tests;
