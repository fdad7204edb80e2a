use crate::server::data::utilisateur::UtilisateurRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_identity_by_login;
