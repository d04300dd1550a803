
use serde::Serialize;

use crate::catalog::pgx_catalog::CatalogMetadata;
use crate::data_types::diplotype::DiplotypeCall;
use crate::data_types::phenotype::Phenotype;
use crate::data_types::risk::RiskAssessment;
use crate::data_types::variant_match::VariantMatch;

/// The pharmacogenomic profile backing one drug's assessment
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PgxProfile {
    /// The gene driving the drug's rule table
    primary_gene: String,
    /// The resolved diplotype call for that gene
    diplotype: DiplotypeCall,
    /// The metabolizer status mapped from the diplotype
    phenotype: Phenotype,
    /// The detected variants contributing to the call
    detected_variants: Vec<VariantMatch>
}

impl PgxProfile {
    pub fn new(primary_gene: String, diplotype: DiplotypeCall, phenotype: Phenotype, detected_variants: Vec<VariantMatch>) -> PgxProfile {
        PgxProfile {
            primary_gene,
            diplotype,
            phenotype,
            detected_variants
        }
    }

    pub fn primary_gene(&self) -> &str {
        &self.primary_gene
    }

    pub fn diplotype(&self) -> &DiplotypeCall {
        &self.diplotype
    }

    pub fn phenotype(&self) -> Phenotype {
        self.phenotype
    }

    pub fn detected_variants(&self) -> &[VariantMatch] {
        &self.detected_variants
    }
}

/// Data quality signals for one drug's assessment
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QualityMetrics {
    /// True iff any catalog locus of the primary gene appeared in the input
    gene_covered: bool,
    /// True iff the diplotype was flagged imprecise by the resolver
    imprecise_genotype: bool
}

impl QualityMetrics {
    pub fn new(gene_covered: bool, imprecise_genotype: bool) -> QualityMetrics {
        QualityMetrics {
            gene_covered,
            imprecise_genotype
        }
    }

    pub fn gene_covered(&self) -> bool {
        self.gene_covered
    }

    pub fn imprecise_genotype(&self) -> bool {
        self.imprecise_genotype
    }
}

/// One catalog drug's full analysis outcome
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrugAnalysisResult {
    /// The drug name as listed in the catalog
    drug: String,
    /// The gene-level profile backing the assessment
    pharmacogenomic_profile: PgxProfile,
    /// The drug-level risk outcome
    risk_assessment: RiskAssessment,
    /// Data quality signals for this assessment
    quality_metrics: QualityMetrics
}

impl DrugAnalysisResult {
    pub fn new(drug: String, pharmacogenomic_profile: PgxProfile, risk_assessment: RiskAssessment, quality_metrics: QualityMetrics) -> DrugAnalysisResult {
        DrugAnalysisResult {
            drug,
            pharmacogenomic_profile,
            risk_assessment,
            quality_metrics
        }
    }

    pub fn drug(&self) -> &str {
        &self.drug
    }

    pub fn pharmacogenomic_profile(&self) -> &PgxProfile {
        &self.pharmacogenomic_profile
    }

    pub fn risk_assessment(&self) -> &RiskAssessment {
        &self.risk_assessment
    }

    pub fn quality_metrics(&self) -> &QualityMetrics {
        &self.quality_metrics
    }
}

/// Intended to be serialized to JSON as the final report
#[derive(Debug, Serialize)]
pub struct PgxAnalysis {
    /// Version of the tool that generated the report
    pgxscreen_version: String,
    /// Metadata for the catalog the report was generated against
    catalog_metadata: CatalogMetadata,
    /// Opaque caller-supplied identifier, carried through for correlation only
    patient_id: String,
    /// One entry per catalog drug, in catalog order
    results: Vec<DrugAnalysisResult>
}

impl PgxAnalysis {
    pub fn new(catalog_metadata: CatalogMetadata, patient_id: String, results: Vec<DrugAnalysisResult>) -> PgxAnalysis {
        PgxAnalysis {
            pgxscreen_version: crate::cli::core::FULL_VERSION.to_string(),
            catalog_metadata,
            patient_id,
            results
        }
    }

    pub fn catalog_metadata(&self) -> &CatalogMetadata {
        &self.catalog_metadata
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn results(&self) -> &[DrugAnalysisResult] {
        &self.results
    }
}
