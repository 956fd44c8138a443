#[cfg(test)]
mod common;

#[cfg(test)]
mod config_tests;

#[cfg(test)]
mod currency_tests;

#[cfg(test)]
mod status_tests;

#[cfg(test)]
mod widget_tests;
