pub mod tle_fetcher;
