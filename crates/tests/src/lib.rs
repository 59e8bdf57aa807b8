#[cfg(test)]
mod common;

#[cfg(test)]
mod session_lifecycle_tests;

#[cfg(test)]
mod route_guard_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod signup_tests;

#[cfg(test)]
mod latency_tests;

#[cfg(test)]
mod search_tests;
