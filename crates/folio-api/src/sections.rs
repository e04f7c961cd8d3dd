// Single-record sections: hero, about, skills, certifications, resume.

use crate::client::PortfolioClient;
use crate::error::Error;
use crate::models::{About, Certification, Hero, Resume, Skills};
use crate::resource::ResourceKey;

impl PortfolioClient {
    pub async fn hero(&self) -> Result<Hero, Error> {
        self.get_cached(ResourceKey::Hero).await
    }

    pub async fn about(&self) -> Result<About, Error> {
        self.get_cached(ResourceKey::About).await
    }

    /// Skills grouped into technical categories and soft skills.
    ///
    /// Fails with `Error::Deserialization` if the `technical` block is
    /// missing.
    pub async fn skills(&self) -> Result<Skills, Error> {
        self.get_cached(ResourceKey::Skills).await
    }

    pub async fn certifications(&self) -> Result<Vec<Certification>, Error> {
        self.get_cached(ResourceKey::Certifications).await
    }

    /// Certificate documents (image/verification links) for the same
    /// credentials, served from `/certificates`.
    pub async fn certificates(&self) -> Result<Vec<Certification>, Error> {
        self.get_cached(ResourceKey::Certificates).await
    }

    pub async fn resume(&self) -> Result<Resume, Error> {
        self.get_cached(ResourceKey::Resume).await
    }
}
