use serde::{Deserialize, Serialize};

/// Hyperparameters forwarded to the training script.
///
/// The learning rate is carried as a string so the command line reproduces
/// the configured literal (`1e-4`) instead of a re-formatted float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Batch size (reduced for a single GPU)
    pub batch_size: u32,
    /// Number of training epochs
    pub training_epochs: u32,
    /// Learning rate literal, e.g. "1e-4"
    pub learning_rate: String,
    /// Random seed
    pub seed: u64,
    /// Device to train on ("cuda" or "cpu")
    pub device: String,
    /// Experiment name
    pub name: String,
    /// Path to the processed training set
    pub train_set: String,
    /// Path to the processed validation set
    pub valid_set: String,
    /// Prediction level
    pub level: u32,
    /// Number of neighbor agents to predict
    pub neighbors_to_predict: u32,
    /// Number of predicted modalities
    pub modalities: u32,
    /// Future horizon length in timesteps
    pub future_len: u32,
    /// Number of encoder layers
    pub encoder_layers: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            batch_size: 8,
            training_epochs: 30,
            learning_rate: "1e-4".to_string(),
            seed: 3407,
            device: "cuda".to_string(),
            name: "SingleProcess_Exp".to_string(),
            train_set: "path/to/train/data".to_string(),
            valid_set: "path/to/valid/data".to_string(),
            level: 3,
            neighbors_to_predict: 1,
            modalities: 6,
            future_len: 80,
            encoder_layers: 6,
        }
    }
}

impl TrainingConfig {
    /// Build the argument vector for the training script.
    ///
    /// Flag order is fixed and matches what the training script documents.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "--batch_size".to_string(),
            self.batch_size.to_string(),
            "--training_epochs".to_string(),
            self.training_epochs.to_string(),
            "--learning_rate".to_string(),
            self.learning_rate.clone(),
            "--seed".to_string(),
            self.seed.to_string(),
            "--device".to_string(),
            self.device.clone(),
            "--name".to_string(),
            self.name.clone(),
            "--train_set".to_string(),
            self.train_set.clone(),
            "--valid_set".to_string(),
            self.valid_set.clone(),
            "--level".to_string(),
            self.level.to_string(),
            "--neighbors_to_predict".to_string(),
            self.neighbors_to_predict.to_string(),
            "--modalities".to_string(),
            self.modalities.to_string(),
            "--future_len".to_string(),
            self.future_len.to_string(),
            "--encoder_layers".to_string(),
            self.encoder_layers.to_string(),
        ]
    }

    /// Validate the configuration according to business rules
    pub fn validate(&self) -> Result<(), String> {
        self.validate_name()?;
        self.validate_learning_rate()?;
        self.validate_counts()?;
        self.validate_paths()?;

        Ok(())
    }

    /// Validate experiment name is a valid identifier
    fn validate_name(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Experiment name cannot be empty".to_string());
        }

        if !self
            .name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!(
                "Invalid experiment name '{}' (must be a valid identifier)",
                self.name
            ));
        }

        Ok(())
    }

    /// Validate the learning rate parses as a positive float
    fn validate_learning_rate(&self) -> Result<(), String> {
        match self.learning_rate.parse::<f64>() {
            Ok(rate) if rate > 0.0 && rate.is_finite() => Ok(()),
            _ => Err(format!(
                "Invalid learning rate '{}' (must be a positive number)",
                self.learning_rate
            )),
        }
    }

    /// Validate numeric hyperparameters where zero is meaningless
    fn validate_counts(&self) -> Result<(), String> {
        let counts = [
            ("batch_size", self.batch_size),
            ("training_epochs", self.training_epochs),
            ("level", self.level),
            ("modalities", self.modalities),
            ("future_len", self.future_len),
            ("encoder_layers", self.encoder_layers),
        ];

        for (field, value) in counts {
            if value == 0 {
                return Err(format!("{} must be greater than zero", field));
            }
        }

        Ok(())
    }

    /// Validate data set paths and device are non-empty
    fn validate_paths(&self) -> Result<(), String> {
        if self.train_set.trim().is_empty() {
            return Err("train_set path cannot be empty".to_string());
        }
        if self.valid_set.trim().is_empty() {
            return Err("valid_set path cannot be empty".to_string());
        }
        if self.device.trim().is_empty() {
            return Err("device cannot be empty".to_string());
        }

        Ok(())
    }
}
