use super::generation::GenerationCounter;
use crate::error::Result;
use std::collections::BTreeMap;

pub const LOGIN_PROMPT: &str = "Please login to add personal genome information";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenotypeRequest {
    pub generation: u64,
    pub user: String,
    pub vrn: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenotypeStatus {
    Loading,
    Loaded(String),
    Failed(String),
}

/// Personal genome page: upload form for the configured user and their genotype
/// for each variation being viewed
pub struct PersonalPage {
    user: Option<String>,
    title: String,
    details: String,
    loading: bool,
    upload_generation: GenerationCounter,
    genotype_generation: GenerationCounter,
    genotypes: BTreeMap<String, GenotypeStatus>,
}

impl PersonalPage {
    pub fn new(user: Option<String>) -> Self {
        Self {
            user,
            title: String::new(),
            details: String::new(),
            loading: false,
            upload_generation: GenerationCounter::new(),
            genotype_generation: GenerationCounter::new(),
            genotypes: BTreeMap::new(),
        }
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn genotypes(&self) -> &BTreeMap<String, GenotypeStatus> {
        &self.genotypes
    }

    pub fn genotype(&self, vrn: &str) -> Option<&GenotypeStatus> {
        self.genotypes.get(vrn)
    }

    /// Without a user only the login prompt is shown
    pub fn load(&mut self) -> Option<UploadRequest> {
        if self.user.is_none() {
            self.title = LOGIN_PROMPT.to_string();
            self.details.clear();
            self.loading = false;
            return None;
        }
        self.title.clear();
        self.loading = true;
        Some(UploadRequest {
            generation: self.upload_generation.issue(),
        })
    }

    pub fn complete_upload(&mut self, generation: u64, result: Result<String>) -> Result<()> {
        self.upload_generation.check(generation)?;
        self.loading = false;
        match result {
            Ok(body) => {
                self.details = body;
                Ok(())
            }
            Err(e) => {
                self.details = e.to_string();
                Err(e)
            }
        }
    }

    /// Start genotype lookups for `members`, replacing any earlier batch
    pub fn lookup_genotypes(&mut self, members: &[String]) -> Vec<GenotypeRequest> {
        self.genotypes.clear();
        let Some(user) = self.user.clone() else {
            return Vec::new();
        };
        let generation = self.genotype_generation.issue();
        members
            .iter()
            .map(|vrn| {
                self.genotypes.insert(vrn.clone(), GenotypeStatus::Loading);
                GenotypeRequest {
                    generation,
                    user: user.clone(),
                    vrn: vrn.clone(),
                }
            })
            .collect()
    }

    pub fn complete_genotype(
        &mut self,
        generation: u64,
        vrn: &str,
        result: Result<String>,
    ) -> Result<()> {
        self.genotype_generation.check(generation)?;
        let status = match &result {
            Ok(text) => GenotypeStatus::Loaded(text.trim().to_string()),
            Err(e) => GenotypeStatus::Failed(e.to_string()),
        };
        self.genotypes.insert(vrn.to_string(), status);
        result.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RvarError;

    #[test]
    fn test_anonymous_user_sees_login_prompt() {
        let mut page = PersonalPage::new(None);
        assert!(page.load().is_none());
        assert_eq!(page.title(), LOGIN_PROMPT);
        assert_eq!(page.details(), "");
        assert!(page.lookup_genotypes(&["rs1".to_string()]).is_empty());
    }

    #[test]
    fn test_upload_form_loaded() {
        let mut page = PersonalPage::new(Some("/people/ada".to_string()));
        let request = page.load().unwrap();
        assert!(page.is_loading());
        assert_eq!(page.title(), "");

        page.complete_upload(request.generation, Ok("<form/>".to_string())).unwrap();
        assert_eq!(page.details(), "<form/>");
        assert!(!page.is_loading());
    }

    #[test]
    fn test_genotypes_from_older_batch_dropped() {
        let mut page = PersonalPage::new(Some("ada".to_string()));
        let old = page.lookup_genotypes(&["rs1".to_string()]);
        let new = page.lookup_genotypes(&["rs2".to_string(), "rs3".to_string()]);
        assert_eq!(new.len(), 2);
        assert_eq!(new[0].user, "ada");

        let stale = page.complete_genotype(old[0].generation, "rs1", Ok("AA".to_string()));
        assert!(matches!(stale, Err(RvarError::StaleResponse { .. })));
        assert!(page.genotype("rs1").is_none());

        page.complete_genotype(new[0].generation, "rs2", Ok("AG\n".to_string())).unwrap();
        assert_eq!(page.genotype("rs2"), Some(&GenotypeStatus::Loaded("AG".to_string())));
        assert_eq!(page.genotype("rs3"), Some(&GenotypeStatus::Loading));
    }
}
