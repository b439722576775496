// Fichier principal de la bibliothèque marsrover
// Expose tous les modules pour utilisation externe

pub mod types;          // Types de base (Direction, Command, Status, Coordinates)
pub mod error;          // Erreurs de configuration
pub mod map;            // Plateau, obstacles et génération procédurale
pub mod robot;          // Machine à états du rover
pub mod display;        // Rendu texte et affichage terminal
pub mod config;         // Configuration de mission (JSON)
pub mod snapshot;       // Instantanés sérialisables de l'état

// Ré-exportation des types principaux pour faciliter l'importation
pub use types::*;
pub use error::{MarsRoverError, Result};
pub use map::Plateau;
pub use robot::Rover;
pub use display::{Display, Extent, Renderer};
pub use config::MissionConfig;
pub use snapshot::*;
