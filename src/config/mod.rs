pub(crate) mod installation;
