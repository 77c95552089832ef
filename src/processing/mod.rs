pub mod duration_fetcher;
