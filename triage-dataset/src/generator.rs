//! Synthetic test dataset generation.
//!
//! Produces 50 labeled GP inbox items with a fixed type and urgency
//! distribution. Entirely synthetic, NZ general-practice flavour; no
//! real patient data. Construction is pure and deterministic: the only
//! transformation is the rule-based ROUTINE -> FYI relabel pass, driven
//! by tags assigned when the cases are authored.

use triage_core::{ItemType, Result, TriageCase, TriageError, Urgency};

/// Number of cases in the generated dataset.
pub const DATASET_SIZE: usize = 50;

/// Expected item-type distribution, checked after generation.
pub const EXPECTED_TYPE_COUNTS: [(ItemType, usize); 5] = [
    (ItemType::LabResult, 15),
    (ItemType::RadiologyReport, 10),
    (ItemType::DischargeSummary, 10),
    (ItemType::SpecialistLetter, 10),
    (ItemType::MedicationRelated, 5),
];

/// Expected urgency distribution, checked after generation.
pub const EXPECTED_URGENCY_COUNTS: [(Urgency, usize); 3] =
    [(Urgency::High, 10), (Urgency::Routine, 30), (Urgency::Fyi, 10)];

/// Replacement label applied by the relabel pass.
struct Relabel {
    reasoning: &'static str,
    action: &'static str,
}

/// A case as authored, before ids are assigned and labels adjusted.
struct Draft {
    item_type: ItemType,
    urgency: Urgency,
    content: &'static str,
    patient_context: &'static str,
    reasoning: &'static str,
    action: &'static str,
    ambiguous: bool,
    relabel: Option<Relabel>,
}

fn draft(
    item_type: ItemType,
    urgency: Urgency,
    content: &'static str,
    patient_context: &'static str,
    reasoning: &'static str,
    action: &'static str,
) -> Draft {
    Draft { item_type, urgency, content, patient_context, reasoning, action, ambiguous: false, relabel: None }
}

impl Draft {
    /// Flag as a deliberately ambiguous edge case.
    fn ambiguous(mut self) -> Self {
        self.ambiguous = true;
        self
    }

    /// Tag for conversion to FYI by the relabel pass, with the label text
    /// the converted case will carry.
    fn relabel_to_fyi(mut self, reasoning: &'static str, action: &'static str) -> Self {
        self.relabel = Some(Relabel { reasoning, action });
        self
    }
}

/// Generate the 50-case synthetic dataset.
///
/// Fails with [`TriageError::Distribution`] when the relabel pass or the
/// post-generation self-check finds counts off target.
pub fn generate() -> Result<Vec<TriageCase>> {
    let mut drafts = Vec::with_capacity(DATASET_SIZE);
    drafts.extend(high_urgency_cases());
    drafts.extend(routine_lab_cases());
    drafts.extend(radiology_cases());
    drafts.extend(discharge_cases());
    drafts.extend(specialist_letter_cases());
    drafts.extend(medication_cases());

    apply_fyi_relabels(&mut drafts)?;

    // Ids assigned sequentially after label adjustments so no gaps exist.
    let cases: Vec<TriageCase> = drafts
        .into_iter()
        .enumerate()
        .map(|(idx, d)| TriageCase {
            id: idx as u32 + 1,
            item_type: d.item_type,
            content: d.content.trim().to_string(),
            patient_context: d.patient_context.trim().to_string(),
            ground_truth_urgency: d.urgency,
            ground_truth_reasoning: d.reasoning.trim().to_string(),
            ground_truth_action: d.action.trim().to_string(),
            ambiguous: d.ambiguous,
        })
        .collect();

    verify_distribution(&cases)?;

    tracing::info!(cases = cases.len(), "Generated synthetic triage dataset");
    Ok(cases)
}

/// Convert the tagged ROUTINE cases to FYI, reaching FYI=10 without
/// changing item-type counts.
fn apply_fyi_relabels(drafts: &mut [Draft]) -> Result<()> {
    let mut converted = 0usize;
    for d in drafts.iter_mut() {
        let Some(relabel) = d.relabel.take() else { continue };
        if d.urgency != Urgency::Routine {
            return Err(TriageError::Distribution(format!(
                "relabel tag on a non-ROUTINE case ({})",
                d.urgency
            )));
        }
        d.urgency = Urgency::Fyi;
        d.reasoning = relabel.reasoning;
        d.action = relabel.action;
        converted += 1;
    }

    if converted != 4 {
        return Err(TriageError::Distribution(format!(
            "expected to convert 4 cases to FYI, converted {}",
            converted
        )));
    }
    Ok(())
}

/// Check the generated dataset against the fixed distribution targets.
pub fn verify_distribution(cases: &[TriageCase]) -> Result<()> {
    if cases.len() != DATASET_SIZE {
        return Err(TriageError::Distribution(format!(
            "expected {} cases, got {}",
            DATASET_SIZE,
            cases.len()
        )));
    }

    for (item_type, expected) in EXPECTED_TYPE_COUNTS {
        let count = cases.iter().filter(|c| c.item_type == item_type).count();
        if count != expected {
            return Err(TriageError::Distribution(format!(
                "item type {} count mismatch: {} != {}",
                item_type, count, expected
            )));
        }
    }

    for (urgency, expected) in EXPECTED_URGENCY_COUNTS {
        let count = cases.iter().filter(|c| c.ground_truth_urgency == urgency).count();
        if count != expected {
            return Err(TriageError::Distribution(format!(
                "urgency {} count mismatch: {} != {}",
                urgency, count, expected
            )));
        }
    }

    let ambiguous = cases.iter().filter(|c| c.ambiguous).count();
    if !(3..=5).contains(&ambiguous) {
        return Err(TriageError::Distribution(format!(
            "expected 3-5 ambiguous cases, got {}",
            ambiguous
        )));
    }

    Ok(())
}

// ----------------------------
// HIGH urgency (10 total)
// ----------------------------

fn high_urgency_cases() -> Vec<Draft> {
    vec![
        draft(
            ItemType::LabResult,
            Urgency::High,
            r#"
PATIENT: Sarah Johnson, 62F
TEST: Troponin I (high sensitivity)
Result: 2.80 ng/mL (CRITICALLY HIGH) [Normal: <0.04]
Time Collected: 08:45 today
Comment: Markedly elevated troponin. Consistent with acute myocardial injury.
"#,
            r#"
History: Hypertension, hyperlipidaemia; smoker.
Yesterday phoned: central chest tightness radiating to jaw for ~20 minutes; resolved. Advised ED if recurs.
Medications: Atorvastatin, amlodipine.
"#,
            r#"
Markedly elevated troponin with recent chest pain is highly concerning for ACS or MI.
Even if asymptomatic now, this requires immediate same-day escalation.
"#,
            r#"
URGENT: Contact patient immediately. If any ongoing symptoms call ambulance.
If currently well, arrange same-day ED assessment with pre-alert; advise no driving.
"#,
        ),
        draft(
            ItemType::RadiologyReport,
            Urgency::High,
            r#"
CT HEAD (NON-CONTRAST)
Patient: Hana Rangi, 76F
Indication: Fall with head strike; on anticoagulation
Findings: Acute left convexity subdural haematoma up to 7 mm with mild mass effect; no midline shift.
Impression: Acute subdural haematoma. URGENT neurosurgical discussion recommended.
Radiologist: Dr M. Patel
"#,
            r#"
History: Atrial fibrillation on apixaban; hypertension.
Seen in ED last night; discharged before CT result finalised.
Lives with daughter.
"#,
            r#"
Acute subdural haematoma on anticoagulation is time-critical; risk of deterioration.
Requires immediate contact and urgent ED/neurosurgical management today.
"#,
            r#"
URGENT: Contact patient/family immediately; advise immediate return to ED by ambulance if symptomatic.
Notify ED that CT has a critical finding; coordinate anticoagulation reversal plan with hospital.
"#,
        ),
        draft(
            ItemType::LabResult,
            Urgency::High,
            r#"
PATIENT: Grace Liu, 19F
TEST: Potassium
Result: 2.1 mmol/L (CRITICALLY LOW) [Normal: 3.5-5.0]
Repeat sample: 2.2 mmol/L (confirmed)
Comment: Severe hypokalaemia; consider urgent replacement. Risk of arrhythmia.
"#,
            r#"
Recent consult: "tired, dizzy". BMI 16.8.
Reports using laxatives "for constipation". Periods irregular.
No known cardiac history.
"#,
            r#"
Severe hypokalaemia is potentially life-threatening; arrhythmia risk.
Requires same-day assessment and treatment, likely ED for IV replacement and monitoring.
"#,
            r#"
URGENT: Contact patient immediately. Arrange same-day ED assessment for ECG and potassium replacement.
Assess for eating disorder/laxative misuse; ensure safety supports.
"#,
        ),
        draft(
            ItemType::DischargeSummary,
            Urgency::High,
            r#"
EMERGENCY DEPARTMENT DISCHARGE SUMMARY
Patient: Robert Thompson, 71M
Presentation: Collapse at home; ~30 min loss of consciousness
ECG: Mobitz Type II AV block
Diagnosis: Syncope, likely cardiac
Disposition: Discharged home
Plan: URGENT cardiology review for pacing assessment
Signed: Dr A. Singh (ED Registrar)
"#,
            r#"
Lives alone; history of IHD and CABG.
Medications: Aspirin, atorvastatin, ramipril.
No GP follow-up booked.
"#,
            r#"
Mobitz II with syncope is high-risk for progression to complete heart block and sudden deterioration.
Requires urgent same-day follow-up and likely re-presentation for monitoring/pacing.
"#,
            r#"
URGENT: Contact patient today to assess symptoms; advise no driving.
Arrange urgent cardiology review within 24-48h; consider immediate return to ED if symptomatic.
"#,
        ),
        draft(
            ItemType::LabResult,
            Urgency::High,
            r#"
PATIENT: Emma Williams, 28F
TEST: Serum beta-hCG
Result: Positive 2,450 IU/L
Medication note: Patient currently prescribed methotrexate 15 mg weekly.
"#,
            r#"
Rheumatoid arthritis on methotrexate for 6 months.
LMP unclear. No contraception documented. Last GP review 3 weeks ago.
"#,
            r#"
Methotrexate is highly teratogenic and contraindicated in pregnancy.
Immediate action is required to stop the drug and arrange urgent specialist input.
"#,
            r#"
URGENT: Contact patient today; stop methotrexate immediately.
Arrange urgent obstetric advice and rheumatology review; start high-dose folic acid as advised; book urgent dating scan.
"#,
        ),
        draft(
            ItemType::LabResult,
            Urgency::High,
            r#"
PATIENT: Moana Te Whaiti, 66F
TEST: INR (on warfarin)
INR: 8.5 (CRITICAL) [Target: 2.0-3.0]
Comment: Result phoned to practice nurse at 11:05. Patient reports gum bleeding this morning.
"#,
            r#"
Indication: Mechanical mitral valve; warfarin regimen recently adjusted.
Also started trimethoprim-sulfamethoxazole by after-hours 3 days ago for UTI.
"#,
            r#"
INR 8.5 with bleeding is high risk of major haemorrhage; interacting antibiotic likely contributor.
Requires same-day management and possible hospital assessment.
"#,
            r#"
URGENT: Contact patient immediately; hold warfarin; assess bleeding.
Arrange same-day ED or urgent GP assessment; consider vitamin K per protocol; stop interacting antibiotic and liaise with anticoagulation clinic.
"#,
        ),
        draft(
            ItemType::RadiologyReport,
            Urgency::High,
            r#"
CHEST X-RAY REPORT
Patient: Michael Chen, 45M
Indication: Persistent cough and weight loss
Findings: 4.5 cm irregular right upper lobe mass with spiculated margins; right hilar lymphadenopathy.
Impression: Highly suspicious for primary lung malignancy. Urgent CT staging recommended.
"#,
            r#"
Seen 2 weeks ago: 6-week dry cough, 5 kg weight loss, night sweats.
Non-smoker. Patient unaware of report.
"#,
            r#"
Likely malignancy requires prompt communication and urgent referral pathway activation.
Same-day action is appropriate because delay increases harm and patient needs urgent next steps arranged.
"#,
            r#"
URGENT: Contact patient today to arrange face-to-face review within 48h.
Initiate urgent suspected cancer referral; arrange CT chest/abdomen; document safety-netting and support.
"#,
        ),
        draft(
            ItemType::LabResult,
            Urgency::High,
            r#"
PATIENT: Peter van Dijk, 72M
TEST: Urea & Electrolytes
Creatinine: 452 umol/L (CRIT) [Baseline: 92 umol/L 4 months ago]
eGFR: 10 mL/min/1.73m2
Potassium: 5.6 mmol/L (H)
Comment: Acute kidney injury; please clinically correlate urgently.
"#,
            r#"
History: CKD stage 2 previously, hypertension.
Started naproxen OTC for back pain 1 week ago; also on ramipril.
Reports reduced urine output and nausea per triage note yesterday.
"#,
            r#"
Severe AKI with hyperkalaemia is potentially life-threatening and may need urgent inpatient management.
Requires same-day contact and likely ED/hospital assessment.
"#,
            r#"
URGENT: Contact patient immediately; stop NSAIDs and ACE inhibitor pending review.
Arrange same-day ED assessment for AKI workup, ECG, repeat labs; manage hyperkalaemia risk.
"#,
        ),
        draft(
            ItemType::DischargeSummary,
            Urgency::High,
            r#"
EMERGENCY DEPARTMENT DISCHARGE SUMMARY
Patient: Aroha Ngatai, 54F
Presentation: Transient right arm weakness and speech difficulty (~15 minutes), resolved
Working diagnosis: TIA
CT head: No acute bleed
Treatment: Aspirin 300 mg stat in ED; discharged on aspirin 100 mg daily
Plan: Urgent TIA clinic referral; GP to arrange risk factor management
"#,
            r#"
History: Hypertension, type 2 diabetes; not on statin.
BP in ED 186/98. Smoker.
Lives rurally; limited transport.
"#,
            r#"
TIA is a warning sign for imminent stroke risk, highest in first 24-48h.
Same-day GP action is warranted to ensure referral, BP management, and safety-netting.
"#,
            r#"
URGENT: Contact patient today. Ensure urgent TIA clinic referral is actioned and transport plan.
Optimise BP and start high-intensity statin unless contraindicated; provide stroke red-flag advice and return precautions.
"#,
        ),
        draft(
            ItemType::LabResult,
            Urgency::High,
            r#"
PATIENT: Liam O'Connor, 38M
TEST: Full Blood Count
WCC: 0.9 x10^9/L (LOW)
Neutrophils: 0.2 x10^9/L (CRITICAL)
Hb: 132 g/L
Platelets: 210 x10^9/L
Lab note: Please contact patient urgently if febrile or unwell.
"#,
            r#"
On carbimazole for Graves' disease; dose increased 4 weeks ago.
Triage note from yesterday: "sore throat and chills overnight"; no appointment booked.
"#,
            r#"
Severe neutropenia/agranulocytosis on carbimazole with systemic symptoms is an emergency.
Requires immediate cessation of medication and urgent same-day hospital assessment.
"#,
            r#"
URGENT: Contact patient now; stop carbimazole immediately; advise immediate ED assessment for sepsis workup and IV antibiotics if febrile.
Inform endocrinology; document drug reaction alert.
"#,
        ),
    ]
}

// ----------------------------
// ROUTINE labs (9)
// ----------------------------

fn routine_lab_cases() -> Vec<Draft> {
    vec![
        draft(
            ItemType::LabResult,
            Urgency::Routine,
            r#"
PATIENT: David Brown, 55M
TEST: HbA1c
Result: 68 mmol/mol (8.4%) [Target: <58]
Previous: 64 mmol/mol 3 months ago
Comment: Suboptimal diabetes control; mild worsening.
"#,
            r#"
Type 2 diabetes x 5 years. Meds: metformin 1 g BD.
Next booked review in 2 weeks.
"#,
            r#"
HbA1c is elevated but not acutely dangerous; can be managed at planned review within 1-3 days or next booked slot.
"#,
            r#"
ROUTINE: Discuss at next review; consider adding SGLT2 inhibitor or GLP-1 agonist; reinforce lifestyle; check complications and screening.
"#,
        ),
        draft(
            ItemType::LabResult,
            Urgency::Routine,
            r#"
PATIENT: Priya Singh, 43F
TEST: Thyroid function
TSH: 6.8 mIU/L (H) [0.4-4.0]
Free T4: 12 pmol/L [10-22]
TPO antibodies: Pending
"#,
            r#"
Symptoms: tiredness and weight gain. No pregnancy. No goitre on last exam.
"#,
            r#"
Subclinical hypothyroidism; requires follow-up but not same-day. Can be reviewed within days.
"#,
            r#"
ROUTINE: Book follow-up within 1-3 weeks; repeat TFTs and review symptoms; consider trial levothyroxine if persistent and symptomatic or TPO positive.
"#,
        ),
        draft(
            ItemType::LabResult,
            Urgency::Routine,
            r#"
PATIENT: Thomas Reilly, 61M
TEST: Lipid profile
Total cholesterol: 6.2 mmol/L (H)
LDL-C: 4.1 mmol/L (H)
HDL-C: 1.0 mmol/L
Triglycerides: 2.0 mmol/L (H)
"#,
            r#"
No known CVD. Family history: father MI at 54.
BP borderline. Non-smoker. Considering primary prevention.
"#,
            r#"
Cardiovascular risk management is important but not urgent. Suitable for routine follow-up.
"#,
            r#"
ROUTINE: Calculate CVD risk; discuss lifestyle; consider statin depending on risk; recheck fasting lipids if needed.
"#,
        ),
        draft(
            ItemType::LabResult,
            Urgency::Routine,
            r#"
PATIENT: Mei Lin, 29F
TEST: Liver function tests
ALT: 78 U/L (H) [<40]
AST: 52 U/L (H) [<40]
ALP: 95 U/L
Bilirubin: 10 umol/L
Comment: Mild transaminitis.
"#,
            r#"
Recent viral URTI. Started combined oral contraceptive 2 months ago.
Alcohol: 6-8 standard drinks/week.
No jaundice, no abdominal pain.
"#,
            r#"
Mild ALT/AST elevation without red flags is not a same-day issue; warrants planned follow-up and repeat testing.
"#,
            r#"
ROUTINE: Repeat LFTs in 4-6 weeks; review alcohol/medications; consider hepatitis serology if persistent or risk factors.
"#,
        ),
        draft(
            ItemType::LabResult,
            Urgency::Routine,
            r#"
PATIENT: George Miller, 70M
TEST: Complete Blood Count
Hb: 108 g/L (L) [130-170]
MCV: 74 fL (L)
Ferritin: 9 ug/L (L)
WCC/Platelets: within range
"#,
            r#"
Fatigue. No overt bleeding. On aspirin.
Last colonoscopy 8 years ago (normal).
"#,
            r#"
AMBIGUOUS: Iron deficiency anaemia needs timely workup. Some clinicians would prioritise faster contact due to malignancy risk,
while others manage within routine time frames if the patient is clinically stable and haemoglobin is only moderately reduced.
"#,
            r#"
ROUTINE: Contact patient within 1-3 days; arrange iron studies review, start oral iron if appropriate; investigate for GI blood loss (FIT, endoscopy referral depending on age/risk).
"#,
        )
        .ambiguous(),
        draft(
            ItemType::LabResult,
            Urgency::Routine,
            r#"
PATIENT: Isla MacDonald, 36F
TEST: Urea & Electrolytes
Sodium: 131 mmol/L (L) [135-145]
Potassium: 4.2 mmol/L
Creatinine: 62 umol/L
Comment: Mild hyponatraemia.
"#,
            r#"
On sertraline 100 mg daily. Recently increased water intake during heatwave.
No confusion, no seizures. Eating normally.
"#,
            r#"
Mild asymptomatic hyponatraemia can be managed with outpatient review and repeat labs.
"#,
            r#"
ROUTINE: Advise moderate fluid intake; repeat sodium in 1-2 weeks; review meds and symptoms; assess for SIADH risk if persistent.
"#,
        ),
        draft(
            ItemType::LabResult,
            Urgency::Routine,
            r#"
PATIENT: Nikhil Sharma, 48M
TEST: Renal profile
Creatinine: 128 umol/L (H) [60-110]
eGFR: 58 mL/min/1.73m2
Previous creatinine: 118 umol/L 12 months ago
"#,
            r#"
Hypertension; on losartan. Muscular build; exercises.
No urinary symptoms. BP controlled.
"#,
            r#"
Mild CKD stage 3a; stable trend. Routine monitoring and cardiovascular risk management.
"#,
            r#"
ROUTINE: Repeat U&E and urine ACR in 3-6 months; optimise BP; avoid NSAIDs; provide CKD education.
"#,
        ),
        draft(
            ItemType::LabResult,
            Urgency::Routine,
            r#"
PATIENT: Olivia Stewart, 22F
TEST: D-dimer
Result: 620 ng/mL FEU (H) [Normal: <500]
Comment: Mild elevation; interpret in clinical context.
"#,
            r#"
Seen yesterday for pleuritic chest pain after a long flight; no dyspnoea; oxygen saturation 98% on room air.
No calf swelling. On combined oral contraceptive. Pain improved with paracetamol.
"#,
            r#"
AMBIGUOUS: Mildly raised D-dimer can be false positive; however thromboembolic risk factors exist.
Reasonable clinicians may choose HIGH for safety if clinical suspicion is moderate or symptoms worsen.
"#,
            r#"
ROUTINE: Reassess clinically within 1-3 days. If any dyspnoea, syncope, tachycardia, haemoptysis, or worsening pain, send to ED same day.
Consider ED-based imaging (CTPA/VQ) if suspicion increases.
"#,
        )
        .ambiguous(),
        draft(
            ItemType::LabResult,
            Urgency::Routine,
            r#"
PATIENT: Ben Wilson, 58M
TEST: PSA
PSA: 6.1 ug/L (H) [Age-specific reference: <4.5]
Free PSA: Not performed
"#,
            r#"
Lower urinary tract symptoms; no weight loss. No UTI symptoms.
On tamsulosin started recently.
"#,
            r#"
AMBIGUOUS: Moderately raised PSA can reflect BPH, prostatitis, recent ejaculation/cycling, or malignancy.
Most clinicians would not treat this as same-day, but opinions vary depending on symptoms and risk factors.
"#,
            r#"
ROUTINE: Repeat PSA in 6 weeks avoiding ejaculation/cycling; check DRE; rule out UTI; discuss urology referral depending on repeat and risk.
"#,
        )
        .ambiguous(),
    ]
}

// ----------------------------
// Radiology (6 routine of which one relabels to FYI via the tag, 2 FYI)
// ----------------------------

fn radiology_cases() -> Vec<Draft> {
    vec![
        draft(
            ItemType::RadiologyReport,
            Urgency::Routine,
            r#"
ABDOMINAL ULTRASOUND
Patient: Stephanie King, 39F
Indication: RUQ discomfort
Findings: Multiple gallstones. No gallbladder wall thickening. CBD 4 mm. No intrahepatic duct dilatation.
Impression: Cholelithiasis without sonographic cholecystitis.
"#,
            r#"
Intermittent RUQ pain after fatty meals; afebrile; no jaundice.
"#,
            r#"
Symptomatic gallstones without cholecystitis can be managed routinely with planned surgical referral if persistent.
"#,
            r#"
ROUTINE: Arrange GP follow-up; provide dietary advice and red flags; consider elective surgical referral if recurrent biliary colic.
"#,
        ),
        draft(
            ItemType::RadiologyReport,
            Urgency::Routine,
            r#"
CHEST X-RAY
Patient: Ajay Kumar, 27M
Indication: Cough 10 days
Findings: Mild patchy left lower zone opacity.
Impression: Changes consistent with mild community-acquired pneumonia.
"#,
            r#"
Seen 2 days ago; started amoxicillin. Improving fever; still coughing.
No comorbidities.
"#,
            r#"
Expected finding aligning with current management; follow-up can be routine.
"#,
            r#"
ROUTINE: Continue antibiotics; review clinically if worsening; consider repeat CXR in 6 weeks if smoker or persistent symptoms.
"#,
        ),
        draft(
            ItemType::RadiologyReport,
            Urgency::Routine,
            r#"
BRAIN MRI
Patient: Emily Hart, 33F
Indication: Headaches and visual aura
Findings: No mass lesion. No acute infarct. Mild non-specific white matter changes.
Impression: No acute intracranial abnormality.
"#,
            r#"
Migraine history. Neuro exam normal.
"#,
            r#"
Reassuring imaging; requires routine follow-up for symptom management.
"#,
            r#"
ROUTINE: Inform patient; manage migraine triggers and prophylaxis if needed; consider ophthalmology review if visual symptoms change.
"#,
        )
        .relabel_to_fyi(
            "Reassuring imaging with no acute abnormality; can be filed and discussed at routine follow-up if needed.",
            "FYI: File result; optional brief message to patient that imaging is reassuring.",
        ),
        draft(
            ItemType::RadiologyReport,
            Urgency::Routine,
            r#"
RENAL ULTRASOUND
Patient: Colin Edwards, 64M
Indication: Reduced eGFR
Findings: Kidneys normal size. No hydronephrosis. Mild increased cortical echogenicity.
Impression: No obstruction. Features may reflect chronic parenchymal disease.
"#,
            r#"
CKD 3a. No urinary symptoms.
"#,
            r#"
No obstruction; chronic disease features support routine management.
"#,
            r#"
ROUTINE: Continue CKD monitoring; manage BP; check urine ACR and metabolic parameters.
"#,
        ),
        draft(
            ItemType::RadiologyReport,
            Urgency::Routine,
            r#"
KNEE X-RAY
Patient: James Parker, 58M
Indication: Knee pain
Findings: Mild medial compartment osteoarthritic change. No fracture.
Impression: Mild osteoarthritis.
"#,
            r#"
Chronic knee pain; wants options.
"#,
            r#"
Non-urgent degenerative finding.
"#,
            r#"
ROUTINE: Discuss conservative management, weight, exercise, physio; consider topical NSAIDs; review analgesia plan.
"#,
        )
        .relabel_to_fyi(
            "Mild osteoarthritis on imaging; no urgent action required. Can be filed and addressed at routine musculoskeletal review.",
            "FYI: File result; discuss management options at next routine visit if the patient requests.",
        ),
        draft(
            ItemType::RadiologyReport,
            Urgency::Routine,
            r#"
ABDOMINAL ULTRASOUND
Patient: Leilani Fong, 46F
Indication: Abnormal LFTs
Findings: Mild fatty infiltration of the liver. No focal lesion. Biliary tree normal.
Impression: Hepatic steatosis.
"#,
            r#"
BMI 32. Drinks 1-2 glasses of wine most nights. Prediabetes.
"#,
            r#"
Fatty liver is common and managed outpatient.
"#,
            r#"
ROUTINE: Counsel on weight loss and alcohol reduction; assess metabolic syndrome; repeat LFTs; consider Fib-4 risk stratification.
"#,
        ),
        draft(
            ItemType::RadiologyReport,
            Urgency::Fyi,
            r#"
CHEST X-RAY
Patient: Zoe Fraser, 31F
Indication: Pre-employment screening
Findings: Normal heart size. Clear lungs. No focal consolidation or effusion.
Impression: Normal chest radiograph.
"#,
            r#"
No symptoms. Required for employment paperwork.
"#,
            r#"
Normal screening result; no clinical action required.
"#,
            r#"
FYI: File result; provide copy to patient/employer if requested.
"#,
        ),
        draft(
            ItemType::RadiologyReport,
            Urgency::Fyi,
            r#"
ABDOMINAL X-RAY
Patient: Isaac Ng, 9M
Indication: Constipation
Findings: Moderate faecal loading. No obstruction.
Impression: Constipation pattern.
"#,
            r#"
Ongoing constipation. No vomiting. Eating and drinking.
"#,
            r#"
Expected finding; no urgent action beyond usual constipation management plan.
"#,
            r#"
FYI: Add result to record; continue constipation plan; review if red flags.
"#,
        ),
    ]
}

// ----------------------------
// Discharge summaries (8, one relabels to FYI)
// ----------------------------

fn discharge_cases() -> Vec<Draft> {
    vec![
        draft(
            ItemType::DischargeSummary,
            Urgency::Routine,
            r#"
HOSPITAL DISCHARGE SUMMARY
Patient: Karen Watts, 63F
Admission: Elective laparoscopic cholecystectomy
Course: Uncomplicated. Discharged day 1.
Medications: Paracetamol, ibuprofen PRN. Continue usual meds.
Follow-up: GP to remove port-site dressings in 5-7 days.
"#,
            r#"
Type 2 diabetes, well controlled. No anticoagulants.
"#,
            r#"
Post-op follow-up tasks are routine and can be booked within days.
"#,
            r#"
ROUTINE: Arrange nurse appointment for wound check/dressing removal; remind about infection signs and when to seek care.
"#,
        ),
        draft(
            ItemType::DischargeSummary,
            Urgency::Routine,
            r#"
ED DISCHARGE SUMMARY
Patient: Tariq Ali, 24M
Presentation: Asthma exacerbation
Treatment: Salbutamol nebs; prednisone 5-day course.
Disposition: Discharged; improved.
Follow-up: GP review in 2-3 days to optimise preventer therapy.
"#,
            r#"
Known asthma; inconsistent preventer use.
"#,
            r#"
Follow-up within a few days is appropriate; not same-day given improvement.
"#,
            r#"
ROUTINE: Book GP review; check inhaler technique; start/step-up ICS; provide action plan and triggers advice.
"#,
        ),
        draft(
            ItemType::DischargeSummary,
            Urgency::Routine,
            r#"
HOSPITAL DISCHARGE SUMMARY
Patient: Noel Bennett, 79M
Admission: Community-acquired pneumonia
Treatment: IV antibiotics; switched to oral amoxicillin-clavulanate to complete 5 days.
Disposition: Discharged with home supports.
Follow-up: GP review in 1 week; repeat CXR in 6 weeks.
"#,
            r#"
COPD; ex-smoker. Lives with spouse.
"#,
            r#"
Standard post-discharge care; review within days to a week.
"#,
            r#"
ROUTINE: Ensure medication course; arrange follow-up; confirm supports; organise repeat imaging if indicated.
"#,
        ),
        draft(
            ItemType::DischargeSummary,
            Urgency::Routine,
            r#"
ED DISCHARGE SUMMARY
Patient: Chloe Martin, 31F
Presentation: Renal colic
CT KUB: 4 mm distal ureteric stone.
Plan: Conservative management; tamsulosin for 2 weeks.
Follow-up: GP to ensure symptom resolution; urology referral if persistent pain or no passage in 4 weeks.
"#,
            r#"
No fever. Pain controlled with NSAIDs.
"#,
            r#"
Small stone managed conservatively; follow-up routine with safety-netting.
"#,
            r#"
ROUTINE: Review in 1-2 weeks; advise red flags (fever, uncontrolled pain, anuria); consider repeat imaging if symptoms persist.
"#,
        ),
        draft(
            ItemType::DischargeSummary,
            Urgency::Routine,
            r#"
HOSPITAL DISCHARGE SUMMARY
Patient: Marcel Dupont, 52M
Admission: New diagnosis heart failure (HFrEF)
Echo: LVEF 35%
Medications on discharge: bisoprolol, ACE inhibitor, furosemide.
Follow-up: GP in 1 week for blood pressure, renal function, and symptom check.
"#,
            r#"
Previously untreated hypertension; works as builder.
"#,
            r#"
Important follow-up but can be arranged within days. No acute instability described.
"#,
            r#"
ROUTINE: Arrange GP review in 3-7 days; organise U&E in 1 week; counsel on daily weights, fluid, and red flags.
"#,
        ),
        draft(
            ItemType::DischargeSummary,
            Urgency::Routine,
            r#"
ED DISCHARGE SUMMARY
Patient: Sophie Evans, 18F
Presentation: Alcohol intoxication
Course: Observed overnight; medically well.
Plan: GP follow-up for mental health and alcohol support.
"#,
            r#"
University student; prior anxiety noted.
"#,
            r#"
Requires follow-up and support but not a same-day medical emergency based on this note alone.
"#,
            r#"
ROUTINE: Offer appointment within 1-3 days; assess mental health, safety, and substance use; provide resources and supports.
"#,
        ),
        draft(
            ItemType::DischargeSummary,
            Urgency::Routine,
            r#"
HOSPITAL DISCHARGE SUMMARY
Patient: Helen Grant, 67F
Admission: Cellulitis of lower leg
Treatment: IV antibiotics then oral cefalexin to complete 7 days.
Follow-up: GP review in 2-3 days to check response.
"#,
            r#"
Diabetes. No systemic symptoms at discharge.
"#,
            r#"
Routine clinical review in a few days is appropriate to ensure improvement.
"#,
            r#"
ROUTINE: Book review; check for spreading, fever, glycaemic control; mark borders and safety-net.
"#,
        ),
        draft(
            ItemType::DischargeSummary,
            Urgency::Routine,
            r#"
ED DISCHARGE SUMMARY
Patient: Daniel Wu, 40M
Presentation: Back pain with sciatica
Exam: No neurological deficit. No red flags.
Plan: Analgesia, activity advice, physiotherapy.
Follow-up: GP as needed.
"#,
            r#"
Warehouse worker. Wants time off work note.
"#,
            r#"
Non-urgent discharge; manage in routine care.
"#,
            r#"
ROUTINE: Provide advice, consider physio referral, review if red flags develop (saddle anaesthesia, urinary retention, weakness).
"#,
        )
        .relabel_to_fyi(
            "Non-urgent ED discharge summary with advice already provided; no immediate action required unless the patient re-presents.",
            "FYI: File; follow-up if patient requests review or develops red flags.",
        ),
    ]
}

// ----------------------------
// Specialist letters (7 routine of which one relabels to FYI, 3 FYI)
// ----------------------------

fn specialist_letter_cases() -> Vec<Draft> {
    vec![
        draft(
            ItemType::SpecialistLetter,
            Urgency::Routine,
            r#"
CARDIOLOGY OUTPATIENT LETTER
Patient: Mark Davies, 60M
Reason: Palpitations
Holter: Frequent PACs; no sustained arrhythmia
Plan: Reassurance. Reduce caffeine. Consider beta blocker if symptomatic.
Follow-up: Discharged back to GP care.
"#,
            r#"
Anxious about symptoms; otherwise well.
"#,
            r#"
Specialist advice requires routine follow-up and patient reassurance; no urgent action.
"#,
            r#"
ROUTINE: Inform patient; discuss triggers; consider low-dose beta blocker if ongoing symptoms and no contraindications.
"#,
        )
        .relabel_to_fyi(
            "Reassurance letter with discharge back to GP; no immediate action required.",
            "FYI: File; mention at next contact if patient remains concerned.",
        ),
        draft(
            ItemType::SpecialistLetter,
            Urgency::Routine,
            r#"
ENDOCRINOLOGY LETTER
Patient: Lucy Patel, 47F
Condition: Type 2 diabetes
Plan: Start empagliflozin 10 mg daily; continue metformin.
Discussed sick day rules and genital infection risk.
Follow-up: Endocrinology in 6 months.
"#,
            r#"
HbA1c recently 72. eGFR 75.
"#,
            r#"
Medication initiation should be actioned in routine time frame with counselling.
"#,
            r#"
ROUTINE: Arrange prescription; counsel re sick day rules, hydration, and infection symptoms; check baseline renal function and BP.
"#,
        ),
        draft(
            ItemType::SpecialistLetter,
            Urgency::Routine,
            r#"
GASTROENTEROLOGY LETTER
Patient: Alan McKenzie, 52M
Procedure: Colonoscopy
Findings: 2 small adenomatous polyps removed; no cancer.
Plan: Surveillance colonoscopy in 5 years.
"#,
            r#"
Prior positive FIT.
"#,
            r#"
Benign findings; routine communication and record update.
"#,
            r#"
ROUTINE: Inform patient; update recall for surveillance in 5 years; reinforce bowel symptom safety-netting.
"#,
        ),
        draft(
            ItemType::SpecialistLetter,
            Urgency::Routine,
            r#"
RESPIRATORY CLINIC LETTER
Patient: Nora Bell, 69F
Diagnosis: COPD
Plan: Continue tiotropium; start pulmonary rehab referral.
Exacerbation plan discussed; influenza and pneumococcal vaccination recommended.
"#,
            r#"
Ex-smoker; 2 exacerbations last year.
"#,
            r#"
Care optimisation steps are important but routine.
"#,
            r#"
ROUTINE: Arrange vaccinations; support pulmonary rehab enrolment; review inhaler technique and action plan.
"#,
        ),
        draft(
            ItemType::SpecialistLetter,
            Urgency::Routine,
            r#"
RHEUMATOLOGY LETTER
Patient: Sione Taufa, 41M
Condition: Gout
Plan: Titrate allopurinol to target urate <0.36 mmol/L.
Provided flare plan (naproxen if no contraindication; colchicine alternative).
"#,
            r#"
On allopurinol 100 mg daily; urate 0.48.
"#,
            r#"
Medication titration and monitoring can be done routinely.
"#,
            r#"
ROUTINE: Arrange urate check in 4 weeks after dose changes; counsel re flare prophylaxis; review renal function and interactions.
"#,
        ),
        draft(
            ItemType::SpecialistLetter,
            Urgency::Routine,
            r#"
NEUROLOGY LETTER
Patient: Kim Robertson, 26F
Reason: Episodes of dizziness
Assessment: Benign paroxysmal positional vertigo (BPPV) likely.
Plan: Epley manoeuvre; physio vestibular exercises. No red flags.
"#,
            r#"
No hearing loss; neuro exam normal.
"#,
            r#"
Benign diagnosis with conservative plan; routine follow-up.
"#,
            r#"
ROUTINE: Offer physio referral; provide BPPV advice and red flags (new neuro symptoms, severe headache).
"#,
        ),
        draft(
            ItemType::SpecialistLetter,
            Urgency::Routine,
            r#"
ORTHOPAEDICS LETTER
Patient: Ian Scott, 57M
Condition: Shoulder impingement
Plan: Subacromial steroid injection performed; physiotherapy recommended.
Follow-up: PRN.
"#,
            r#"
Manual worker. Wants return-to-work guidance.
"#,
            r#"
Routine advice and physio coordination.
"#,
            r#"
ROUTINE: Arrange physio; advise graded activity; provide work certificate if required.
"#,
        ),
        draft(
            ItemType::SpecialistLetter,
            Urgency::Fyi,
            r#"
DERMATOLOGY OUTPATIENT LETTER
Patient: Jennifer Smith, 34F
Referral: Eczema
Assessment: Mild atopic eczema; well controlled.
Plan: Continue emollients; intermittent topical steroid PRN.
Discharged back to GP care.
"#,
            r#"
Referral 3 months ago for flares; improved recently.
"#,
            r#"
Specialist discharge letter without required actions; information only.
"#,
            r#"
FYI: File in record; no action needed unless patient re-presents.
"#,
        ),
        draft(
            ItemType::SpecialistLetter,
            Urgency::Fyi,
            r#"
OPHTHALMOLOGY LETTER
Patient: Robert King, 58M
Reason: Diabetic retinopathy screening
Findings: No retinopathy. Mild cataract.
Plan: Routine screening in 24 months.
"#,
            r#"
Type 2 diabetes; HbA1c improving.
"#,
            r#"
Routine screening outcome with no action required.
"#,
            r#"
FYI: Record result; set recall for 24 months.
"#,
        ),
        draft(
            ItemType::SpecialistLetter,
            Urgency::Fyi,
            r#"
ENT LETTER
Patient: Maria Lopez, 45F
Reason: Recurrent sinusitis
Assessment: Allergic rhinitis predominant; no surgical indication.
Plan: Continue intranasal steroid; saline rinses. Discharged.
"#,
            r#"
Seasonal symptoms; no asthma.
"#,
            r#"
Information only; no urgent clinical action required.
"#,
            r#"
FYI: File; reinforce management if patient asks.
"#,
        ),
    ]
}

// ----------------------------
// Medication-related (4 routine, 1 FYI)
// ----------------------------

fn medication_cases() -> Vec<Draft> {
    vec![
        draft(
            ItemType::MedicationRelated,
            Urgency::Routine,
            r#"
PHARMACY QUERY
Patient: Riley Thompson, 14M
Medication: Methylphenidate LA
Request: Early repeat requested, 10 days before due. Pharmacy asks if OK to dispense.
"#,
            r#"
ADHD. Stable on current dose. Previous early repeat 2 months ago.
Lives with mum; school holidays currently.
"#,
            r#"
Requires clinical review of adherence/diversion but not same-day medical urgency.
"#,
            r#"
ROUTINE: Contact caregiver within 1-3 days; clarify reason for early request; check stock loss vs dose change; consider controlled drug policy and schedule review.
"#,
        ),
        draft(
            ItemType::MedicationRelated,
            Urgency::Routine,
            r#"
DRUG INTERACTION ALERT
Patient: Aria Wilson, 67F
Alert: Clarithromycin prescribed by after-hours; patient on simvastatin 40 mg nightly.
Interaction: Increased risk of myopathy/rhabdomyolysis.
"#,
            r#"
Simvastatin for secondary prevention.
Clarithromycin started for presumed chest infection; day 2 of course.
"#,
            r#"
Clinically important interaction requiring timely action, but if asymptomatic can be managed promptly within days (hold statin and/or change antibiotic).
"#,
            r#"
ROUTINE: Contact patient within 1-3 days; advise hold simvastatin while on clarithromycin and for 3 days after; consider alternative antibiotic if appropriate; document interaction counselling.
"#,
        ),
        draft(
            ItemType::MedicationRelated,
            Urgency::Routine,
            r#"
REPEAT PRESCRIPTION REQUEST
Patient: Mason Carter, 51M
Medication: Omeprazole 20 mg daily
Note: Long-term use >2 years; request continuation. Pharmacy asks if review needed.
"#,
            r#"
History of reflux. No alarm symptoms documented.
"#,
            r#"
Long-term PPI warrants review, but not urgent.
"#,
            r#"
ROUTINE: Approve short supply; book medication review; consider step-down, lifestyle measures, and check indications.
"#,
        ),
        draft(
            ItemType::MedicationRelated,
            Urgency::Routine,
            r#"
DRUG INTERACTION ALERT
Patient: Kiri Wallace, 35F
Alert: Ibuprofen purchased OTC regularly; patient prescribed lithium carbonate.
Interaction: NSAIDs may increase lithium levels and risk toxicity (tremor, nausea, confusion).
"#,
            r#"
Bipolar disorder; stable on lithium for 3 years.
Recent back pain; taking ibuprofen 400 mg TDS most days for 1 week.
No current symptoms of toxicity documented.
"#,
            r#"
Clinically important interaction that should be addressed promptly, but if asymptomatic can be managed within 1-3 days with advice and monitoring.
"#,
            r#"
ROUTINE: Contact patient within 1-3 days; advise avoid NSAIDs; suggest alternative analgesia.
Arrange lithium level and renal function if NSAID use occurred; safety-net for toxicity symptoms.
"#,
        ),
        draft(
            ItemType::MedicationRelated,
            Urgency::Fyi,
            r#"
MEDICATION CHANGE NOTICE (Hospital)
Patient: Linda Moore, 74F
Notice: Metoprolol changed to bisoprolol during admission.
Reason: Heart failure guideline therapy.
Discharge meds attached.
"#,
            r#"
Seen in hospital last week for heart failure optimisation; feeling better.
"#,
            r#"
Administrative notice of a medication change already implemented; no immediate action required beyond record update.
"#,
            r#"
FYI: Update medication list; ensure patient has correct script supply; address at next routine review.
"#,
        ),
    ]
}
