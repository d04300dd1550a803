
use log::{debug, info};

use crate::catalog::pgx_catalog::PgxCatalog;
use crate::data_types::analysis::{DrugAnalysisResult, PgxAnalysis, PgxProfile, QualityMetrics};
use crate::data_types::diplotype::{Diplotype, DiplotypeCall};
use crate::data_types::risk::RiskAssessment;
use crate::diplotyper::{resolve_diplotypes, resolve_phenotypes};
use crate::matcher::parse_variants;
use crate::vcf::errors::VcfFormatError;

/// Runs the full pipeline: parse, match, resolve, and score every catalog drug.
/// Exactly one result is produced per catalog drug, in catalog order, even when
/// the input contains zero usable variants.
/// # Arguments
/// * `catalog` - the pre-loaded reference catalog
/// * `text` - the full variant document text
/// * `patient_id` - opaque caller identifier; logged for correlation, never used in computation
/// # Errors
/// * if the input is not recognizable as this tabular format
pub fn analyze_vcf(catalog: &PgxCatalog, text: &str, patient_id: &str) -> Result<Vec<DrugAnalysisResult>, VcfFormatError> {
    info!("Analyzing variant document for patient {patient_id}...");

    let summary = parse_variants(catalog, text)?;
    info!("Parsed {} data lines, {} catalog matches.", summary.total_data_lines(), summary.detected_variants().len());

    // resolve each gene once; drugs sharing a gene must report the same call
    let diplotypes = resolve_diplotypes(catalog, summary.detected_variants());
    let phenotypes = resolve_phenotypes(catalog, &diplotypes);

    let policy = catalog.confidence_policy();
    let mut results: Vec<DrugAnalysisResult> = Vec::with_capacity(catalog.drug_entries().len());
    for (drug, entry) in catalog.drug_entries().iter() {
        let gene = entry.primary_gene();

        let diplotype_call: DiplotypeCall = diplotypes.get(gene)
            .cloned()
            .unwrap_or_else(|| DiplotypeCall::new(Diplotype::homozygous_reference(catalog.reference_allele(gene)), false));
        let phenotype = match phenotypes.get(gene) {
            Some(&p) => p,
            None => catalog.phenotype_for(gene, diplotype_call.diplotype())
        };

        let rule = entry.rule_for(phenotype);
        let gene_covered = summary.gene_coverage().get(gene).copied().unwrap_or(false);

        let mut confidence = rule.base_confidence();
        if !gene_covered {
            confidence -= policy.missing_coverage_penalty();
        }
        if diplotype_call.imprecise() {
            confidence -= policy.unknown_zygosity_penalty();
        }

        debug!("{drug}: {gene} {} => {phenotype} => {} ({confidence:.2})", diplotype_call.diplotype().diplotype(), rule.risk_label());

        let detected_variants = summary.variants_for_gene(gene).into_iter().cloned().collect();
        let quality_metrics = QualityMetrics::new(gene_covered, diplotype_call.imprecise());
        let profile = PgxProfile::new(gene.to_string(), diplotype_call, phenotype, detected_variants);
        let risk_assessment = RiskAssessment::new(rule.risk_label().to_string(), rule.severity(), confidence);

        results.push(DrugAnalysisResult::new(drug.clone(), profile, risk_assessment, quality_metrics));
    }

    Ok(results)
}

/// Runs the pipeline and wraps the results into the serializable report
/// # Arguments
/// * `catalog` - the pre-loaded reference catalog
/// * `text` - the full variant document text
/// * `patient_id` - opaque caller identifier, carried into the report
/// # Errors
/// * if the input is not recognizable as this tabular format
pub fn analyze_to_report(catalog: &PgxCatalog, text: &str, patient_id: &str) -> Result<PgxAnalysis, VcfFormatError> {
    let results = analyze_vcf(catalog, text, patient_id)?;
    Ok(PgxAnalysis::new(
        catalog.catalog_metadata().clone(),
        patient_id.to_string(),
        results
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_approx_eq::assert_approx_eq;
    use rustc_hash::FxHashSet as HashSet;

    const SIX_LINE_VCF: &str = "##fileformat=VCFv4.2\n\
        ##reference=GRCh38\n\
        #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tSAMPLE1\n\
        chr22\t42128945\trs3892097\tC\tT\t100\tPASS\t.\tGT:DP\t0/1:35\n\
        chr10\t94781859\trs4244285\tG\tA\t200\tPASS\t.\tGT:DP\t1/1:42\n\
        chr10\t94942290\trs1799853\tC\tT\t150\tPASS\t.\tGT:DP\t0/1:28\n\
        chr12\t21178615\trs4149056\tT\tC\t180\tPASS\t.\tGT:DP\t0/0:50\n\
        chr6\t18139051\trs1142345\tA\tG\t120\tPASS\t.\tGT:DP\t0/1:30\n\
        chr1\t97915614\trs3918290\tC\tT\t250\tPASS\t.\tGT:DP\t1/1:60\n";

    /// The same loci with the genotype columns stripped entirely
    const SIX_LINE_NO_FORMAT: &str = "##fileformat=VCFv4.2\n\
        #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
        chr22\t42128945\trs3892097\tC\tT\t100\tPASS\t.\n\
        chr10\t94781859\trs4244285\tG\tA\t200\tPASS\t.\n\
        chr10\t94942290\trs1799853\tC\tT\t150\tPASS\t.\n\
        chr12\t21178615\trs4149056\tT\tC\t180\tPASS\t.\n\
        chr6\t18139051\trs1142345\tA\tG\t120\tPASS\t.\n\
        chr1\t97915614\trs3918290\tC\tT\t250\tPASS\t.\n";

    const NO_MATCH_VCF: &str = "##fileformat=VCFv4.2\n\
        #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
        chr3\t123456\trs55555\tA\tG\t90\tPASS\t.\n";

    #[test]
    fn test_totality() {
        let catalog = PgxCatalog::default();
        for text in [SIX_LINE_VCF, SIX_LINE_NO_FORMAT, NO_MATCH_VCF] {
            let results = analyze_vcf(&catalog, text, "PT001").unwrap();
            assert_eq!(results.len(), catalog.drug_entries().len());
        }
    }

    #[test]
    fn test_confidence_bounds() {
        let catalog = PgxCatalog::default();
        for text in [SIX_LINE_VCF, SIX_LINE_NO_FORMAT, NO_MATCH_VCF] {
            for result in analyze_vcf(&catalog, text, "PT001").unwrap() {
                let score = result.risk_assessment().confidence_score();
                assert!((0.0..=1.0).contains(&score), "score {score} out of bounds");
            }
        }
    }

    #[test]
    fn test_cross_gene_diversity() {
        // six genes with six different genotype situations must not collapse
        // into a single repeated risk label across differing phenotypes
        let catalog = PgxCatalog::default();
        let results = analyze_vcf(&catalog, SIX_LINE_VCF, "PT001").unwrap();

        let mut found_differing_pair = false;
        for a in results.iter() {
            for b in results.iter() {
                if a.pharmacogenomic_profile().primary_gene() != b.pharmacogenomic_profile().primary_gene()
                    && a.risk_assessment().risk_label() != b.risk_assessment().risk_label() {
                    found_differing_pair = true;
                }
            }
        }
        assert!(found_differing_pair);

        let labels: HashSet<&str> = results.iter().map(|r| r.risk_assessment().risk_label()).collect();
        assert!(labels.len() > 1);
    }

    #[test]
    fn test_six_line_calls() {
        let catalog = PgxCatalog::default();
        let results = analyze_vcf(&catalog, SIX_LINE_VCF, "PT001").unwrap();

        let by_drug = |name: &str| results.iter().find(|r| r.drug() == name).unwrap();

        // het CYP2D6 *4 -> intermediate
        let codeine = by_drug("CODEINE");
        assert_eq!(codeine.pharmacogenomic_profile().diplotype().diplotype().diplotype(), "*1/*4");
        assert_eq!(codeine.risk_assessment().risk_label(), "Monitor for reduced efficacy");

        // hom CYP2C19 *2 -> poor
        let clopidogrel = by_drug("CLOPIDOGREL");
        assert_eq!(clopidogrel.pharmacogenomic_profile().diplotype().diplotype().diplotype(), "*2/*2");
        assert_eq!(clopidogrel.risk_assessment().risk_label(), "Avoid - impaired activation, use alternative");

        // hom-ref SLCO1B1 -> normal, full confidence, covered
        let simvastatin = by_drug("SIMVASTATIN");
        assert_eq!(simvastatin.risk_assessment().risk_label(), "Standard dosing");
        assert!(simvastatin.quality_metrics().gene_covered());
        assert_approx_eq!(simvastatin.risk_assessment().confidence_score(), 0.95);
    }

    #[test]
    fn test_gene_sharing_consistency() {
        let catalog = PgxCatalog::default();
        let results = analyze_vcf(&catalog, SIX_LINE_VCF, "PT001").unwrap();

        let clopidogrel = results.iter().find(|r| r.drug() == "CLOPIDOGREL").unwrap();
        let voriconazole = results.iter().find(|r| r.drug() == "VORICONAZOLE").unwrap();

        // same primary gene: identical diplotype and phenotype, labels may differ
        assert_eq!(
            clopidogrel.pharmacogenomic_profile().diplotype().diplotype(),
            voriconazole.pharmacogenomic_profile().diplotype().diplotype()
        );
        assert_eq!(
            clopidogrel.pharmacogenomic_profile().phenotype(),
            voriconazole.pharmacogenomic_profile().phenotype()
        );
        assert_ne!(
            clopidogrel.risk_assessment().risk_label(),
            voriconazole.risk_assessment().risk_label()
        );
    }

    #[test]
    fn test_coverage_gating() {
        let catalog = PgxCatalog::default();
        let covered = analyze_vcf(&catalog, SIX_LINE_VCF, "PT001").unwrap();
        let uncovered = analyze_vcf(&catalog, NO_MATCH_VCF, "PT001").unwrap();

        // simvastatin resolves to the same phenotype either way (hom-ref vs untested),
        // so the only difference is the coverage penalty
        let covered_score = covered.iter().find(|r| r.drug() == "SIMVASTATIN").unwrap()
            .risk_assessment().confidence_score();
        let uncovered_score = uncovered.iter().find(|r| r.drug() == "SIMVASTATIN").unwrap()
            .risk_assessment().confidence_score();
        assert!(uncovered_score < covered_score);
    }

    #[test]
    fn test_unknown_zygosity_penalty() {
        let catalog = PgxCatalog::default();
        let confident = analyze_vcf(&catalog, SIX_LINE_VCF, "PT001").unwrap();
        let unknown = analyze_vcf(&catalog, SIX_LINE_NO_FORMAT, "PT001").unwrap();

        // identical loci; stripping the genotype columns must strictly lower
        // every drug's confidence relative to its confident counterpart
        for (c, u) in confident.iter().zip(unknown.iter()) {
            assert_eq!(c.drug(), u.drug());
            assert!(u.risk_assessment().confidence_score() < c.risk_assessment().confidence_score(),
                "{} did not lose confidence", u.drug());
            assert!(u.quality_metrics().imprecise_genotype());
        }
    }

    #[test]
    fn test_no_match_defaults() {
        let catalog = PgxCatalog::default();
        let results = analyze_vcf(&catalog, NO_MATCH_VCF, "PT001").unwrap();

        for result in results.iter() {
            assert_eq!(result.pharmacogenomic_profile().diplotype().diplotype().diplotype(), "*1/*1");
            assert!(!result.quality_metrics().gene_covered());
            assert!(result.pharmacogenomic_profile().detected_variants().is_empty());
            // reduced confidence relative to the drug's normal-metabolizer base
            let entry = catalog.drug_entries().get(result.drug()).unwrap();
            let base = entry.rule_for(result.pharmacogenomic_profile().phenotype()).base_confidence();
            assert!(result.risk_assessment().confidence_score() < base);
        }
    }

    #[test]
    fn test_idempotence() {
        let catalog = PgxCatalog::default();
        let first = analyze_vcf(&catalog, SIX_LINE_VCF, "PT001").unwrap();
        let second = analyze_vcf(&catalog, SIX_LINE_VCF, "PT001").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_patient_id_has_no_effect() {
        let catalog = PgxCatalog::default();
        let first = analyze_vcf(&catalog, SIX_LINE_VCF, "PT001").unwrap();
        let second = analyze_vcf(&catalog, SIX_LINE_VCF, "PT002").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unrecognizable_input_is_an_error() {
        let catalog = PgxCatalog::default();
        assert!(analyze_vcf(&catalog, "not a variant file", "PT001").is_err());
        // but a valid header with zero data lines is a fully-processed outcome
        let empty = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";
        let results = analyze_vcf(&catalog, empty, "PT001").unwrap();
        assert_eq!(results.len(), catalog.drug_entries().len());
    }

    #[test]
    fn test_report_wrapper() {
        let catalog = PgxCatalog::default();
        let report = analyze_to_report(&catalog, SIX_LINE_VCF, "PT042").unwrap();
        assert_eq!(report.patient_id(), "PT042");
        assert_eq!(report.results().len(), catalog.drug_entries().len());

        // the report must serialize cleanly with the documented field names
        let encoded = serde_json::to_string(&report).unwrap();
        assert!(encoded.contains("\"pharmacogenomic_profile\""));
        assert!(encoded.contains("\"risk_assessment\""));
        assert!(encoded.contains("\"confidence_score\""));
        assert!(encoded.contains("\"quality_metrics\""));
    }
}
