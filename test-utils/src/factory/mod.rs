//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand
//! for quick default creation. Factories take the ids of the rows they reference, so
//! parents are created first.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let societe = factory::create_societe(&db).await?;
//! let voiture = factory::voiture::VoitureFactory::new(&db, societe.id)
//!     .marque("Renault")
//!     .disponible(false)
//!     .build()
//!     .await?;
//! ```

pub mod equipement;
pub mod etablissement;
pub mod helpers;
pub mod profil;
pub mod reservation;
pub mod societe;
pub mod utilisateur;
pub mod voiture;

pub use equipement::create_equipement;
pub use etablissement::create_etablissement;
pub use profil::create_profil;
pub use reservation::create_reservation;
pub use societe::create_societe;
pub use utilisateur::create_utilisateur;
pub use voiture::create_voiture;
