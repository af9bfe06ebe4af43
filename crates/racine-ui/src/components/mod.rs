pub(crate) mod status_page;
