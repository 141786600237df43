//! Built-in reference data, version [`REFERENCE_DATA_VERSION`].
//!
//! Single source of truth for the default catalogue, effect model, organ
//! models and recommendation tiers.

use std::collections::BTreeMap;

use super::{
    EffectModel, EffectSpec, HabitCatalogue, HabitEffectProfile, HabitEntry, MechanismEntry,
    OrganMechanismProfile, OrganProfile, RecommendationTiers, ReferenceData,
};
use crate::constants::REFERENCE_DATA_VERSION;
use crate::habit::{ids, organs, HabitId, HabitKind, OrganId};
use crate::metric::Metric::{self, *};

pub fn reference_data() -> ReferenceData {
    ReferenceData {
        version: REFERENCE_DATA_VERSION,
        habits: catalogue(),
        effects: effect_model(),
        organs: vulnerability_model(),
        organ_mechanisms: mechanism_model(),
        recommendations: recommendation_tiers(),
    }
}

fn catalogue() -> HabitCatalogue {
    use HabitKind::{Beneficial, Harmful};
    HabitCatalogue::new(vec![
        HabitEntry::new(ids::DRUGS, "Recreational Drugs", Harmful),
        HabitEntry::new(ids::SMOKING, "Smoking", Harmful),
        HabitEntry::new(ids::ALCOHOL, "Alcohol", Harmful),
        HabitEntry::new(ids::CHRONIC_STRESS, "Chronic Stress", Harmful),
        HabitEntry::new(ids::PROCESSED_DIET, "Processed Diet", Harmful),
        HabitEntry::new(ids::SEDENTARY, "Sedentary Lifestyle", Harmful),
        HabitEntry::new(ids::SOCIAL_ISOLATION, "Social Isolation", Harmful),
        HabitEntry::new(ids::PORNOGRAPHY, "Pornography", Harmful),
        HabitEntry::new(ids::GAMING, "Excessive Gaming", Harmful),
        HabitEntry::new(ids::SLEEP_CONSISTENCY, "Sleep Consistency", Beneficial),
        HabitEntry::new(ids::EXERCISE, "Exercise", Beneficial),
        HabitEntry::new(ids::HEALTHY_DIET, "Healthy Diet", Beneficial),
        HabitEntry::new(ids::HYDRATION, "Hydration", Beneficial),
        HabitEntry::new(ids::SOCIAL_CONNECTION, "Social Connection", Beneficial),
        HabitEntry::new(ids::MEDITATION, "Meditation", Beneficial),
        HabitEntry::new(ids::READING, "Reading", Beneficial),
        HabitEntry::new(ids::JOURNALING, "Journaling", Beneficial),
    ])
}

fn profile(
    primary: (Metric, f64),
    secondary: &[(Metric, f64)],
    minimal: &[(Metric, f64)],
    explanation: &str,
) -> HabitEffectProfile {
    let specs = |list: &[(Metric, f64)]| -> Vec<EffectSpec> {
        list.iter()
            .map(|&(metric, magnitude)| EffectSpec::new(metric, magnitude))
            .collect()
    };
    HabitEffectProfile {
        primary: EffectSpec::new(primary.0, primary.1),
        secondary: specs(secondary),
        minimal: specs(minimal),
        explanation: Some(explanation.to_string()),
    }
}

fn effect_model() -> EffectModel {
    let mut model = EffectModel::new();
    let mut add = |id: &str, p: HabitEffectProfile| {
        model.insert(HabitId::new(id), p);
    };

    // Harmful
    add(
        ids::DRUGS,
        profile(
            (MentalHealth, -20.0),
            &[(CognitiveFunction, -15.0), (OverallHealth, -12.0)],
            &[(LifeExpectancy, -8.0), (DiseaseRisk, 15.0)],
            "Recreational drugs primarily disrupt neurotransmitter systems and cognitive function. \
             Level {level} use significantly impairs mental health and decision-making capacity.",
        ),
    );
    add(
        ids::SMOKING,
        profile(
            (PhysicalHealth, -18.0),
            &[(LifeExpectancy, -12.0), (DiseaseRisk, 18.0)],
            &[(OverallHealth, -6.0), (CardioStrain, 8.0)],
            "Smoking primarily damages cardiovascular and respiratory systems. \
             Level {level} smoking dramatically reduces physical health and life expectancy.",
        ),
    );
    add(
        ids::ALCOHOL,
        profile(
            (OverallHealth, -16.0),
            &[(MentalHealth, -10.0), (CognitiveFunction, -8.0)],
            &[(PhysicalHealth, -5.0), (LifeExpectancy, -4.0)],
            "Alcohol consumption primarily affects liver function and overall health. \
             Level {level} consumption significantly impacts multiple organ systems.",
        ),
    );
    add(
        ids::CHRONIC_STRESS,
        profile(
            (MentalHealth, -18.0),
            &[(StressLoad, 15.0), (SleepQuality, -10.0)],
            &[(Happiness, -6.0), (ImmuneSystem, -4.0)],
            "Chronic stress primarily elevates cortisol levels, severely impacting mental health. \
             Level {level} stress disrupts sleep, immunity, and emotional regulation.",
        ),
    );
    add(
        ids::PROCESSED_DIET,
        profile(
            (MetabolicHealth, -15.0),
            &[(PhysicalHealth, -8.0), (Inflammation, 10.0)],
            &[(OverallHealth, -4.0), (DiseaseRisk, 6.0)],
            "Ultra-processed foods primarily disrupt metabolic health through inflammation and \
             insulin resistance. Level {level} consumption significantly affects physical wellbeing.",
        ),
    );
    add(
        ids::SEDENTARY,
        profile(
            (PhysicalFitness, -14.0),
            &[(PhysicalHealth, -8.0), (CardioStrain, 8.0)],
            &[(MentalHealth, -3.0), (MetabolicHealth, -5.0)],
            "Sedentary behavior primarily reduces physical fitness and cardiovascular health. \
             Level {level} inactivity significantly impacts strength and endurance.",
        ),
    );
    add(
        ids::SOCIAL_ISOLATION,
        profile(
            (Happiness, -16.0),
            &[(MentalHealth, -12.0), (QualityOfLife, -8.0)],
            &[(StressLoad, 6.0), (OverallWellness, -4.0)],
            "Social isolation primarily affects happiness and mental wellbeing. \
             Level {level} isolation significantly reduces life satisfaction and emotional health.",
        ),
    );
    add(
        ids::PORNOGRAPHY,
        profile(
            (Happiness, -14.0),
            &[(MentalHealth, -10.0), (CognitiveFunction, -6.0)],
            &[(QualityOfLife, -4.0)],
            "Excessive pornography consumption primarily affects mental health through dopamine \
             dysregulation. Level {level} use impacts emotional and cognitive function.",
        ),
    );
    add(
        ids::GAMING,
        profile(
            (CognitiveFunction, -10.0),
            &[(Happiness, -5.0)],
            &[(SleepQuality, -3.0)],
            "Excessive gaming primarily affects cognitive function and attention span. \
             Level {level} gaming significantly impacts focus and mental clarity.",
        ),
    );

    // Beneficial
    add(
        ids::SLEEP_CONSISTENCY,
        profile(
            (OverallHealth, 20.0),
            &[
                (CognitiveFunction, 15.0),
                (RecoveryCapacity, 18.0),
                (MentalHealth, 12.0),
            ],
            &[(PhysicalHealth, 8.0), (ImmuneSystem, 10.0)],
            "Quality sleep is the foundation of health, providing universal recovery benefits. \
             Level {level} sleep consistency dramatically improves all health metrics.",
        ),
    );
    add(
        ids::EXERCISE,
        profile(
            (MentalHealth, 18.0),
            &[(QualityOfLife, 12.0), (Happiness, 10.0)],
            &[(CardioStrain, -8.0), (MetabolicHealth, 6.0)],
            "Physical exercise primarily boosts mental health through endorphins and \
             neuroplasticity. Level {level} activity significantly improves mood and life satisfaction.",
        ),
    );
    add(
        ids::HEALTHY_DIET,
        profile(
            (PhysicalHealth, 16.0),
            &[
                (MetabolicHealth, 12.0),
                (OverallHealth, 10.0),
                (Inflammation, -8.0),
            ],
            &[(ImmuneSystem, 6.0), (DiseaseRisk, -5.0)],
            "A healthy diet provides broad anti-inflammatory and nutritional benefits. \
             Level {level} nutrition significantly supports multiple body systems.",
        ),
    );
    add(
        ids::HYDRATION,
        profile(
            (PhysicalHealth, 12.0),
            &[(CognitiveFunction, 8.0), (OverallHealth, 6.0)],
            &[(MetabolicHealth, 4.0), (RecoveryCapacity, 5.0)],
            "Proper hydration supports all cellular functions and physical performance. \
             Level {level} hydration significantly improves cognitive and physical function.",
        ),
    );
    add(
        ids::SOCIAL_CONNECTION,
        profile(
            (Happiness, 18.0),
            &[(MentalHealth, 12.0), (QualityOfLife, 10.0)],
            &[(OverallWellness, 6.0), (StressLoad, -4.0)],
            "Strong social connections primarily boost happiness and emotional wellbeing. \
             Level {level} social engagement significantly improves life satisfaction.",
        ),
    );
    add(
        ids::MEDITATION,
        profile(
            (StressLoad, -15.0),
            &[(MentalHealth, 10.0), (SleepQuality, 8.0)],
            &[(Happiness, 5.0), (CognitiveFunction, 4.0)],
            "Meditation primarily reduces stress through parasympathetic activation. \
             Level {level} practice significantly improves stress management and mental clarity.",
        ),
    );
    add(
        ids::READING,
        profile(
            (CognitiveFunction, 12.0),
            &[(MentalHealth, 6.0)],
            &[(Happiness, 3.0)],
            "Regular reading primarily enhances cognitive function and mental stimulation. \
             Level {level} reading significantly improves focus and knowledge retention.",
        ),
    );
    add(
        ids::JOURNALING,
        profile(
            (MentalHealth, 10.0),
            &[(StressLoad, -6.0)],
            &[(Happiness, 3.0)],
            "Reflective writing primarily supports mental health through emotional processing. \
             Level {level} journaling significantly improves self-awareness and stress management.",
        ),
    );

    model
}

fn organ(id: &str, name: &str, baseline: f64, weights: &[(&str, f64)]) -> OrganProfile {
    OrganProfile {
        id: OrganId::new(id),
        name: name.to_string(),
        baseline,
        vulnerabilities: weights
            .iter()
            .map(|&(habit, w)| (HabitId::new(habit), w))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn vulnerability_model() -> Vec<OrganProfile> {
    vec![
        organ(
            organs::LUNGS,
            "Lungs",
            78.0,
            &[
                (ids::SMOKING, 3.5),
                (ids::EXERCISE, -2.0),
                (ids::CHRONIC_STRESS, 1.2),
            ],
        ),
        organ(
            organs::HEART,
            "Heart",
            75.0,
            &[
                (ids::SMOKING, 3.0),
                (ids::EXERCISE, -3.0),
                (ids::CHRONIC_STRESS, 2.5),
                (ids::SOCIAL_CONNECTION, -2.0),
            ],
        ),
        organ(
            organs::BRAIN,
            "Brain",
            80.0,
            &[
                (ids::DRUGS, 4.0),
                (ids::ALCOHOL, 2.8),
                (ids::EXERCISE, -2.5),
                (ids::SLEEP_CONSISTENCY, -3.0),
                (ids::CHRONIC_STRESS, 3.0),
            ],
        ),
        organ(
            organs::LIVER,
            "Liver",
            76.0,
            &[
                (ids::ALCOHOL, 3.8),
                (ids::PROCESSED_DIET, 2.0),
                (ids::HEALTHY_DIET, -2.5),
            ],
        ),
        organ(
            organs::KIDNEYS,
            "Kidneys",
            82.0,
            &[
                (ids::DRUGS, 3.2),
                (ids::HYDRATION, -2.8),
                (ids::CHRONIC_STRESS, 1.8),
            ],
        ),
        organ(
            organs::GUT,
            "Gut",
            72.0,
            &[
                (ids::PROCESSED_DIET, 3.0),
                (ids::HEALTHY_DIET, -2.8),
                (ids::CHRONIC_STRESS, 2.2),
            ],
        ),
        organ(
            organs::SKIN,
            "Skin",
            77.0,
            &[
                (ids::SMOKING, 2.5),
                (ids::HYDRATION, -2.2),
                (ids::CHRONIC_STRESS, 2.0),
            ],
        ),
        organ(
            organs::BLADDER,
            "Bladder",
            80.0,
            &[
                (ids::HYDRATION, -2.5),
                (ids::CHRONIC_STRESS, 1.8),
                (ids::ALCOHOL, 2.2),
                (ids::PROCESSED_DIET, 1.5),
            ],
        ),
    ]
}

fn mechanism_organ(
    id: &str,
    name: &str,
    baseline: f64,
    body_weight: Option<f64>,
    top_harmful: Vec<MechanismEntry>,
    top_beneficial: Vec<MechanismEntry>,
) -> OrganMechanismProfile {
    OrganMechanismProfile {
        id: OrganId::new(id),
        name: name.to_string(),
        baseline,
        body_weight,
        top_harmful,
        top_beneficial,
    }
}

fn mechanism_model() -> Vec<OrganMechanismProfile> {
    type E = MechanismEntry;
    vec![
        mechanism_organ(
            organs::LUNGS,
            "Lungs",
            78.0,
            Some(0.18),
            vec![
                E::new(ids::SMOKING, 0.35, "Tar and carbon monoxide damage alveoli and airway lining"),
                E::new(ids::CHRONIC_STRESS, 0.12, "Sustained cortisol narrows airways and weakens mucosal defence"),
                E::new(ids::SEDENTARY, 0.08, "Low ventilation demand reduces lung capacity over time"),
            ],
            vec![
                E::new(ids::EXERCISE, 0.20, "Aerobic training strengthens respiratory muscles and capacity"),
                E::new(ids::HYDRATION, 0.06, "Adequate fluids keep airway mucus clear"),
            ],
        ),
        mechanism_organ(
            organs::HEART,
            "Heart",
            75.0,
            Some(0.20),
            vec![
                E::new(ids::SMOKING, 0.30, "Nicotine raises blood pressure and accelerates atherosclerosis"),
                E::new(ids::CHRONIC_STRESS, 0.25, "Chronic sympathetic activation strains the cardiovascular system"),
                E::new(ids::SEDENTARY, 0.15, "Inactivity lowers cardiac efficiency and raises resting heart rate"),
            ],
            vec![
                E::new(ids::EXERCISE, 0.30, "Regular activity improves cardiac output and vascular elasticity"),
                E::new(ids::SOCIAL_CONNECTION, 0.20, "Strong social ties lower blood pressure and inflammation"),
                E::new(ids::HEALTHY_DIET, 0.15, "Balanced nutrition improves lipid profile"),
            ],
        ),
        mechanism_organ(
            organs::BRAIN,
            "Brain",
            80.0,
            Some(0.22),
            vec![
                E::new(ids::DRUGS, 0.40, "Disrupts neurotransmitter balance and damages neurons"),
                E::new(ids::CHRONIC_STRESS, 0.30, "Elevated cortisol shrinks the hippocampus"),
                E::new(ids::ALCOHOL, 0.28, "Neurotoxic metabolites impair memory and cognition"),
            ],
            vec![
                E::new(ids::SLEEP_CONSISTENCY, 0.30, "Deep sleep clears metabolic waste from neural tissue"),
                E::new(ids::EXERCISE, 0.25, "Exercise increases neurotrophic factors and neuroplasticity"),
                E::new(ids::MEDITATION, 0.15, "Meditation strengthens attention and emotional regulation circuits"),
            ],
        ),
        mechanism_organ(
            organs::LIVER,
            "Liver",
            76.0,
            Some(0.16),
            vec![
                E::new(ids::ALCOHOL, 0.38, "Ethanol metabolism causes fat build-up and hepatocyte damage"),
                E::new(ids::PROCESSED_DIET, 0.20, "Excess sugar and fat drive non-alcoholic fatty liver disease"),
                E::new(ids::DRUGS, 0.18, "Toxic metabolites overload hepatic detoxification"),
            ],
            vec![
                E::new(ids::HEALTHY_DIET, 0.25, "Fibre and antioxidants support hepatic regeneration"),
                E::new(ids::EXERCISE, 0.12, "Activity reduces hepatic fat stores"),
            ],
        ),
        mechanism_organ(
            organs::KIDNEYS,
            "Kidneys",
            82.0,
            Some(0.12),
            vec![
                E::new(ids::DRUGS, 0.32, "Nephrotoxic compounds damage filtration units"),
                E::new(ids::CHRONIC_STRESS, 0.18, "Stress-driven hypertension damages renal vessels"),
                E::new(ids::PROCESSED_DIET, 0.12, "High sodium intake raises filtration pressure"),
            ],
            vec![
                E::new(ids::HYDRATION, 0.28, "Adequate fluids support filtration and prevent stones"),
                E::new(ids::HEALTHY_DIET, 0.10, "Balanced electrolytes ease renal workload"),
            ],
        ),
        mechanism_organ(
            organs::GUT,
            "Gut",
            72.0,
            Some(0.14),
            vec![
                E::new(ids::PROCESSED_DIET, 0.30, "Additives and low fibre disrupt the microbiome"),
                E::new(ids::CHRONIC_STRESS, 0.22, "The gut-brain axis transmits stress as motility and barrier changes"),
                E::new(ids::ALCOHOL, 0.15, "Alcohol irritates the mucosa and increases permeability"),
            ],
            vec![
                E::new(ids::HEALTHY_DIET, 0.28, "Fibre feeds beneficial bacteria"),
                E::new(ids::HYDRATION, 0.10, "Fluids support regular digestion"),
            ],
        ),
        mechanism_organ(
            organs::SKIN,
            "Skin",
            77.0,
            Some(0.08),
            vec![
                E::new(ids::SMOKING, 0.25, "Vasoconstriction and free radicals break down collagen"),
                E::new(ids::CHRONIC_STRESS, 0.20, "Cortisol triggers inflammatory skin conditions"),
                E::new(ids::PROCESSED_DIET, 0.10, "High glycaemic load promotes inflammation"),
            ],
            vec![
                E::new(ids::HYDRATION, 0.22, "Hydration maintains elasticity and barrier function"),
                E::new(ids::SLEEP_CONSISTENCY, 0.12, "Overnight repair renews skin cells"),
            ],
        ),
        mechanism_organ(
            organs::BLADDER,
            "Bladder",
            80.0,
            None,
            vec![
                E::new(ids::ALCOHOL, 0.22, "Alcohol irritates the bladder lining and acts as a diuretic"),
                E::new(ids::CHRONIC_STRESS, 0.18, "Stress increases urgency and pelvic muscle tension"),
                E::new(ids::PROCESSED_DIET, 0.15, "Irritant additives aggravate the bladder wall"),
            ],
            vec![E::new(ids::HYDRATION, 0.25, "Steady fluid intake flushes bacteria and dilutes irritants")],
        ),
    ]
}

fn recommendation_tiers() -> RecommendationTiers {
    let list = |items: &[&str]| -> Vec<HabitId> { items.iter().map(|&id| HabitId::new(id)).collect() };
    RecommendationTiers {
        critical_harmful: list(&[ids::DRUGS, ids::SMOKING, ids::CHRONIC_STRESS, ids::ALCOHOL]),
        critical_beneficial: list(&[ids::SLEEP_CONSISTENCY, ids::EXERCISE, ids::HEALTHY_DIET]),
        secondary_beneficial: list(&[ids::SOCIAL_CONNECTION, ids::HYDRATION, ids::MEDITATION]),
    }
}
