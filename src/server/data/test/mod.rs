mod record;
mod utilisateur;
