use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use serde::{Deserialize, Serialize};
use toml;

use crate::fft::FourierConvention;

/// Settings that change what the combiner computes. The Fourier convention
/// travels with the record rather than as an ambient default; reconstructed
/// values depend on it.
#[derive(Clone,Copy,Debug,Serialize,Deserialize)]
pub struct ReconSettings {
    pub fourier_convention:FourierConvention,
    pub remove_oversampling:bool,
    pub strict_shift_check:bool,
}

impl Default for ReconSettings {
    fn default() -> Self {
        Self {
            fourier_convention:FourierConvention::Centered,
            remove_oversampling:true,
            strict_shift_check:false,
        }
    }
}

impl ReconSettings {
    pub fn to_file(&self,filename:&Path) {
        let t = toml::to_string_pretty(&self).expect("cannot serialize settings");
        let p = filename.with_extension(Self::file_ext());
        let mut f = File::create(&p).expect(&format!("cannot create file {:?}",p));
        f.write_all(t.as_bytes()).expect("trouble writing to file");
    }
    pub fn from_file(filename:&Path) -> Self {
        let p = filename.with_extension(Self::file_ext());
        let mut f = File::open(&p).expect(&format!("cannot open file {:?}",p));
        let mut s = String::new();
        f.read_to_string(&mut s).expect("trouble reading file");
        toml::from_str(&s).expect("recon settings file must be corrupt")
    }
    pub fn exists(filename:&Path) -> bool {
        filename.with_extension(Self::file_ext()).exists()
    }
    fn file_ext() -> String {
        String::from("recon_settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_centered_and_trimming() {
        let settings = ReconSettings::default();
        assert_eq!(settings.fourier_convention,FourierConvention::Centered);
        assert!(settings.remove_oversampling);
        assert!(!settings.strict_shift_check);
    }

    #[test]
    fn settings_roundtrip_through_toml() {
        let settings = ReconSettings {
            fourier_convention:FourierConvention::Standard,
            remove_oversampling:false,
            strict_shift_check:true,
        };
        let base = std::env::temp_dir().join("recon_settings_roundtrip");
        settings.to_file(&base);
        assert!(ReconSettings::exists(&base));
        let restored = ReconSettings::from_file(&base);
        assert_eq!(restored.fourier_convention,FourierConvention::Standard);
        assert!(!restored.remove_oversampling);
        assert!(restored.strict_shift_check);
    }
}
