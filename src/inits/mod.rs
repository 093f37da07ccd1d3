pub(crate) mod uniform;
